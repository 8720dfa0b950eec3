// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashSet;
use std::path::Path;

use crate::merge::apply_merge_mode;
use crate::reference::{Ref, RefType};
use crate::value::Value;
use crate::{SigilError, loader, query, utils};

mod expand;

/// Reserved object member holding an embedded reference expression.
pub const REF_KEY: &str = "$ref";

/// Per-call bookkeeping for one top-level resolution.
///
/// The visited set is created fresh per call and threaded explicitly through
/// recursive steps, never shared globally, so concurrent resolutions of
/// unrelated documents cannot interfere.
#[derive(Debug, Default)]
pub struct ResolutionContext {
    visited: HashSet<(String, String)>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a (locator, path) pair, failing if it was already processed
    /// within this resolution call.
    fn enter(&mut self, source: &str, path: &str) -> Result<(), SigilError> {
        if !self.visited.insert((source.to_string(), path.to_string())) {
            return Err(SigilError::CircularReference {
                source: source.to_string(),
                path: path.to_string(),
                hint: Some("Break the reference cycle between these documents".into()),
                code: Some(310),
            });
        }
        Ok(())
    }
}

/// Orchestrates property/file/global lookups, follows chained references,
/// and guards against cycles.
#[derive(Debug, Default)]
pub struct Resolver {
    globals: Option<Value>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a resolver with the shared catalog consulted by
    /// `$global::` references, a root distinct from the current document.
    pub fn with_globals(globals: Value) -> Self {
        Self {
            globals: Some(globals),
        }
    }

    /// Resolve a reference to its terminal, fully dereferenced value.
    ///
    /// `document` is the document currently being processed, `locator` names
    /// it for cycle bookkeeping, and `base_dir` anchors relative file
    /// locators. When the resolved value itself carries a `$ref` member, the
    /// chain is followed hop by hop, each hop re-checking the visited set.
    ///
    /// # Errors
    /// Propagates path-not-found, load, parse, and merge errors unchanged;
    /// fails with a circular-reference error when a chain revisits a
    /// (locator, path) pair. Nothing is retried internally.
    pub fn resolve(
        &self,
        ctx: &mut ResolutionContext,
        reference: &Ref,
        document: &Value,
        locator: &str,
        base_dir: &Path,
    ) -> Result<Value, SigilError> {
        let source = match reference.ref_type {
            RefType::Property => locator,
            RefType::File | RefType::Global => reference.file.as_str(),
        };
        ctx.enter(source, &reference.path)?;

        match reference.ref_type {
            RefType::Property => {
                let value = query::get(document, &reference.path)?.clone();
                self.chase(ctx, value, document, locator, base_dir)
            }
            RefType::File => {
                let loaded = loader::load(&reference.file, base_dir)?;
                let value = query::get(&loaded, &reference.path)?.clone();
                // Nested references resolve relative to the loaded file.
                let next_base = utils::locator_parent(&reference.file, base_dir)
                    .unwrap_or_else(|| base_dir.to_path_buf());
                self.chase(ctx, value, &loaded, &reference.file, &next_base)
            }
            RefType::Global => {
                let catalog = self.globals.as_ref().ok_or_else(|| SigilError::RuntimeError {
                    message: "no global document loaded".into(),
                    hint: Some("Construct the resolver with a globals catalog".into()),
                    code: Some(305),
                })?;
                let value = query::get(catalog, &reference.path)?.clone();
                self.chase(ctx, value, catalog, &reference.file, base_dir)
            }
        }
    }

    /// Follow an embedded `$ref` member on a resolved value.
    ///
    /// The member's siblings are the inline operand; the nested reference's
    /// merge mode governs how they combine with the recursive result.
    fn chase(
        &self,
        ctx: &mut ResolutionContext,
        value: Value,
        document: &Value,
        locator: &str,
        base_dir: &Path,
    ) -> Result<Value, SigilError> {
        let Value::Object(map) = &value else {
            return Ok(value);
        };
        let Some(expr) = map.get(REF_KEY) else {
            return Ok(value);
        };

        let nested = Ref::parse(expr)?;
        let mut siblings = map.clone();
        siblings.shift_remove(REF_KEY);
        let inline = if siblings.is_empty() {
            None
        } else {
            Some(Value::Object(siblings))
        };

        let resolved = self.resolve(ctx, &nested, document, locator, base_dir)?;
        apply_merge_mode(nested.mode, &resolved, inline.as_ref())
    }
}

use std::path::Path;

use indexmap::IndexMap;

use super::{REF_KEY, ResolutionContext, Resolver};
use crate::SigilError;
use crate::merge::apply_merge_mode;
use crate::reference::Ref;
use crate::value::Value;

impl Resolver {
    /// Expand every `$ref` site in a document, substituting merged results
    /// in place. This is the operation the surrounding configuration parser
    /// invokes while loading workflow, agent, tool, and task documents.
    ///
    /// Sibling members of a `$ref` are expanded first, then merged with the
    /// resolved value under the reference's merge mode. Each site gets a
    /// fresh `ResolutionContext`, so reusing one reference at several sites
    /// is not mistaken for a cycle.
    ///
    /// # Errors
    /// Propagates the first parse, query, load, merge, or circular-reference
    /// error encountered.
    pub fn expand(
        &self,
        document: &Value,
        locator: &str,
        base_dir: &Path,
    ) -> Result<Value, SigilError> {
        self.expand_value(document, document, locator, base_dir)
    }

    fn expand_value(
        &self,
        value: &Value,
        root: &Value,
        locator: &str,
        base_dir: &Path,
    ) -> Result<Value, SigilError> {
        match value {
            Value::Object(map) => {
                if let Some(expr) = map.get(REF_KEY) {
                    let reference = Ref::parse(expr)?;
                    let mut ctx = ResolutionContext::new();
                    let resolved = self.resolve(&mut ctx, &reference, root, locator, base_dir)?;

                    let mut siblings = IndexMap::new();
                    for (key, member) in map {
                        if key == REF_KEY {
                            continue;
                        }
                        siblings.insert(
                            key.clone(),
                            self.expand_value(member, root, locator, base_dir)?,
                        );
                    }
                    let inline = if siblings.is_empty() {
                        None
                    } else {
                        Some(Value::Object(siblings))
                    };
                    return apply_merge_mode(reference.mode, &resolved, inline.as_ref());
                }

                let mut out = IndexMap::new();
                for (key, member) in map {
                    out.insert(
                        key.clone(),
                        self.expand_value(member, root, locator, base_dir)?,
                    );
                }
                Ok(Value::Object(out))
            }
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(self.expand_value(item, root, locator, base_dir)?);
                }
                Ok(Value::Array(out))
            }
            scalar => Ok(scalar.clone()),
        }
    }
}

// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use crate::loader;
use crate::resolve::Resolver;
use crate::value::Value;
use crate::SigilError;

mod access;
mod conversion;
mod validation;

/// Main configuration struct: loads a document, resolves every reference in
/// it, and hands out typed access to the merged result.
pub struct SigilConfig {
    root: Value,
    locator: String,
    base_dir: PathBuf,
}

impl SigilConfig {
    /// Load a configuration file and resolve references against its own
    /// directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = SigilConfig::from_file("workflow.yaml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SigilError> {
        let path_ref = path.as_ref();

        // References resolve relative to the document's own directory.
        let base_dir = path_ref.parent().unwrap_or_else(|| Path::new("."));

        Self::load_and_expand(path_ref, base_dir, Resolver::new())
    }

    /// Load a configuration file with fallback support.
    ///
    /// Tries to load from the primary path first. If that fails (file not
    /// found), attempts to load from the fallback path.
    pub fn from_file_with_fallback<P: AsRef<Path>>(
        primary: P,
        fallback: P,
    ) -> Result<Self, SigilError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(SigilError::FileError { .. }) => {
                Self::from_file(&fallback).map_err(|e| match e {
                    SigilError::FileError { message, .. } => SigilError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(301),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other), // Pass through non-file errors
        }
    }

    /// Load a configuration file and resolve references from a specific
    /// base directory.
    pub fn from_file_with_base<P: AsRef<Path>>(path: P, base_dir: P) -> Result<Self, SigilError> {
        Self::load_and_expand(path.as_ref(), base_dir.as_ref(), Resolver::new())
    }

    /// Load a configuration file together with a globals catalog consulted
    /// by `$global::` references.
    pub fn from_file_with_globals<P: AsRef<Path>>(
        path: P,
        globals_path: P,
    ) -> Result<Self, SigilError> {
        let globals_ref = globals_path.as_ref();
        let globals_base = globals_ref.parent().unwrap_or_else(|| Path::new("."));
        let globals = loader::load(&globals_ref.to_string_lossy(), globals_base)?;

        let path_ref = path.as_ref();
        let base_dir = path_ref.parent().unwrap_or_else(|| Path::new("."));
        Self::load_and_expand(path_ref, base_dir, Resolver::with_globals(globals))
    }

    /// Parse a configuration from a YAML string (no file I/O for the
    /// document itself; file references still resolve against the current
    /// directory).
    pub fn from_str(content: &str) -> Result<Self, SigilError> {
        Self::expand_str(content, Resolver::new())
    }

    /// Parse a configuration from a YAML string with a globals catalog.
    pub fn from_str_with_globals(content: &str, globals: Value) -> Result<Self, SigilError> {
        Self::expand_str(content, Resolver::with_globals(globals))
    }

    /// The fully-resolved document root.
    pub fn document(&self) -> &Value {
        &self.root
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn load_and_expand(path: &Path, base_dir: &Path, resolver: Resolver) -> Result<Self, SigilError> {
        let locator = path.to_string_lossy().to_string();
        let raw = loader::load(&locator, base_dir)?;
        let root = resolver.expand(&raw, &locator, base_dir)?;

        Ok(Self {
            root,
            locator,
            base_dir: base_dir.to_path_buf(),
        })
    }

    fn expand_str(content: &str, resolver: Resolver) -> Result<Self, SigilError> {
        let raw: Value = serde_yaml::from_str(content).map_err(|e| SigilError::FileError {
            message: format!("failed to load file: <string>: {}", e),
            path: "<string>".into(),
            hint: Some("Check that the document is valid YAML".into()),
            code: Some(302),
        })?;

        let base_dir = PathBuf::from(".");
        let root = resolver.expand(&raw, "<string>", &base_dir)?;

        Ok(Self {
            root,
            locator: "<string>".into(),
            base_dir,
        })
    }
}

#[cfg(test)]
mod tests;

// Author: Dustin Pilgrim
// License: MIT

use crate::SigilConfig;
use crate::SigilError;
use crate::value::Value;

/// Export a document tree to pretty-printed JSON.
///
/// Resolved documents contain only plain data (references have already been
/// substituted), so every value maps directly: strings, numbers, booleans,
/// arrays, objects, and null.
///
/// # Errors
/// Returns an error if the tree cannot be serialized.
pub fn export_value_to_json(value: &Value) -> Result<String, SigilError> {
    serde_json::to_string_pretty(value).map_err(|e| SigilError::RuntimeError {
        message: format!("Failed to serialize document to JSON: {}", e),
        hint: None,
        code: Some(500),
    })
}

/// Export a configuration file directly to JSON.
///
/// Convenience function that loads, resolves all references, and exports in
/// one call.
///
/// # Examples
/// ```no_run
/// use sigil_cfg::export::export_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let json = export_file("workflow.yaml")?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns error if the file doesn't exist, contains invalid YAML/JSON, or
/// any reference in it fails to resolve.
pub fn export_file(path: &str) -> Result<String, SigilError> {
    let config = SigilConfig::from_file(path)?;
    export_value_to_json(config.document())
}

// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use crate::SigilError;
use crate::utils::{expand_path, is_url};
use crate::value::Value;

/// Fetch and decode an external document into the generic tree.
///
/// `locator` is either a filesystem path (with `~/` expansion, resolved
/// against `base_dir` when relative) or a URL fetched with a blocking
/// client. Bytes decode as JSON when the locator ends in `.json`, as YAML
/// otherwise.
///
/// Loads are independent per call: no caching, no retries, safe to repeat
/// for the same locator within one resolution chain.
///
/// # Errors
/// Returns a `FileError` wrapping "failed to load file: `<locator>`" when
/// the document cannot be fetched or decoded.
pub fn load(locator: &str, base_dir: &Path) -> Result<Value, SigilError> {
    let raw = fetch(locator, base_dir)?;
    decode(locator, &raw)
}

fn fetch(locator: &str, base_dir: &Path) -> Result<String, SigilError> {
    if is_url(locator) {
        return reqwest::blocking::get(locator)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| SigilError::FileError {
                message: format!("failed to load file: {}: {}", locator, e),
                path: locator.to_string(),
                hint: Some("Check that the URL is reachable".into()),
                code: Some(301),
            });
    }

    let path = expand_path(locator, base_dir);
    fs::read_to_string(&path).map_err(|e| SigilError::FileError {
        message: format!("failed to load file: {}: {}", locator, e),
        path: path.to_string_lossy().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })
}

fn decode(locator: &str, raw: &str) -> Result<Value, SigilError> {
    if locator.ends_with(".json") {
        serde_json::from_str(raw).map_err(|e| decode_error(locator, &e.to_string()))
    } else {
        serde_yaml::from_str(raw).map_err(|e| decode_error(locator, &e.to_string()))
    }
}

fn decode_error(locator: &str, detail: &str) -> SigilError {
    SigilError::FileError {
        message: format!("failed to load file: {}: {}", locator, detail),
        path: locator.to_string(),
        hint: Some("Check that the document is valid YAML or JSON".into()),
        code: Some(302),
    }
}

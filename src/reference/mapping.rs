// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use super::{MergeMode, Ref, RefType, parse_mode};
use crate::SigilError;
use crate::utils::looks_like_locator;
use crate::value::Value;

pub(super) fn parse(map: &IndexMap<String, Value>) -> Result<Ref, SigilError> {
    let mut ref_type: Option<RefType> = None;
    let mut path = String::new();
    let mut file = String::new();
    let mut mode = MergeMode::Merge;

    for (key, val) in map {
        match key.as_str() {
            "type" => {
                ref_type = Some(match expect_string(val, "type")? {
                    "property" => RefType::Property,
                    "file" => RefType::File,
                    "global" => RefType::Global,
                    other => {
                        return Err(SigilError::ParseError {
                            message: format!("invalid type: {}", other),
                            hint: Some("Valid types are: property, file, global".into()),
                            code: Some(208),
                        });
                    }
                });
            }
            "path" => path = expect_string(val, "path")?.to_string(),
            "file" => file = expect_string(val, "file")?.to_string(),
            "mode" => mode = parse_mode(expect_string(val, "mode")?)?,
            other => {
                return Err(SigilError::ParseError {
                    message: format!("unknown field '{}'", other),
                    hint: Some("Recognized fields are: type, path, file, mode".into()),
                    code: Some(202),
                });
            }
        }
    }

    let ref_type = ref_type.ok_or_else(|| SigilError::ParseError {
        message: "type is required".into(),
        hint: Some("Add a type field: property, file, or global".into()),
        code: Some(203),
    })?;

    match ref_type {
        RefType::File => {
            if file.is_empty() {
                return Err(SigilError::ParseError {
                    message: "file type requires file field".into(),
                    hint: Some("Point file at a path or URL, e.g. ./shared.yaml".into()),
                    code: Some(204),
                });
            }
            if !looks_like_locator(&file) {
                return Err(SigilError::ParseError {
                    message: format!("invalid file path: {}", file),
                    hint: Some(
                        "A file locator needs a path separator, a URL scheme, \
                         or a .yaml/.yml/.json extension"
                            .into(),
                    ),
                    code: Some(205),
                });
            }
        }
        RefType::Property => {
            if path.is_empty() {
                return Err(SigilError::ParseError {
                    message: "path is required for property type".into(),
                    hint: Some("Add a dot-separated path, e.g. tasks.0.name".into()),
                    code: Some(206),
                });
            }
        }
        RefType::Global => {
            if path.is_empty() {
                return Err(SigilError::ParseError {
                    message: "path is required for global type".into(),
                    hint: Some("Add a dot-separated path into the globals catalog".into()),
                    code: Some(207),
                });
            }
        }
    }

    Ok(Ref {
        ref_type,
        path,
        file,
        mode,
    })
}

fn expect_string<'a>(value: &'a Value, field: &str) -> Result<&'a str, SigilError> {
    value.as_str().ok_or_else(|| SigilError::ParseError {
        message: format!("{} must be a string, got {}", field, value.type_name()),
        hint: None,
        code: Some(209),
    })
}

use crate::SigilError;
use crate::value::Value;

mod mapping;
mod scalar;

/// Where a reference resolves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefType {
    /// Path lookup within the document currently being processed.
    Property,
    /// Loads a separate document (file or URL), then resolves a path in it.
    File,
    /// Resolves against the caller-supplied globals catalog.
    Global,
}

/// Policy for combining a resolved value with the inline value at the
/// reference site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    #[default]
    Merge,
    Replace,
    Append,
}

/// A normalized reference descriptor, produced once per reference occurrence
/// and consumed immediately by the resolution driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Ref {
    pub ref_type: RefType,
    pub path: String,
    pub file: String,
    pub mode: MergeMode,
}

impl Ref {
    /// Parse a reference expression from document data.
    ///
    /// Scalars use the string grammar (`<path>`, `<locator>::<path>`,
    /// `$global::<path>`, optional `!<mode>` suffix); mappings use the
    /// explicit `{type, path, file, mode}` form.
    ///
    /// # Errors
    /// Returns a parse error for unrecognized mode/type tokens, unknown
    /// mapping fields, or missing required fields.
    pub fn parse(value: &Value) -> Result<Self, SigilError> {
        match value {
            Value::String(s) => scalar::parse(s),
            Value::Object(map) => mapping::parse(map),
            other => Err(SigilError::ParseError {
                message: format!(
                    "reference must be a string or a mapping, got {}",
                    other.type_name()
                ),
                hint: None,
                code: Some(200),
            }),
        }
    }

    /// Parse the string form of a reference.
    pub fn parse_str(input: &str) -> Result<Self, SigilError> {
        scalar::parse(input)
    }
}

pub(crate) fn parse_mode(token: &str) -> Result<MergeMode, SigilError> {
    match token {
        "merge" => Ok(MergeMode::Merge),
        "replace" => Ok(MergeMode::Replace),
        "append" => Ok(MergeMode::Append),
        other => Err(SigilError::ParseError {
            message: format!("invalid mode: {}", other),
            hint: Some("Valid modes are: merge, replace, append".into()),
            code: Some(201),
        }),
    }
}

#[cfg(test)]
mod tests;

use std::fmt;

/// The main error type for reference parsing, resolution, and merging.
#[derive(Debug, Clone, PartialEq)]
pub enum SigilError {
    /// Raised for malformed reference expressions: bad mode tokens,
    /// unknown mapping fields, missing required fields.
    ParseError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a path query fails against a document.
    PathNotFound {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a referenced file or URL cannot be fetched or decoded.
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a reference chain revisits an already-visited
    /// (locator, path) pair.
    CircularReference {
        source: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a merge mode cannot combine the values it was given.
    MergeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ValidationError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for runtime issues, such as a missing globals catalog.
    RuntimeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for SigilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigilError::ParseError { message, hint, code } =>
                write!(f, "[SIGIL] Parse Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::PathNotFound { message, path, hint, code } =>
                write!(f, "[SIGIL] Path Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::FileError { message, path, hint, code } =>
                write!(f, "[SIGIL] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::CircularReference { source, path, hint, code } =>
                write!(f, "[SIGIL] Reference Error: circular reference detected at '{}::{}'{}{}",
                    source, path,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::MergeError { message, hint, code } =>
                write!(f, "[SIGIL] Merge Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::TypeError { message, hint, code } =>
                write!(f, "[SIGIL] Type Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::ValidationError { message, hint, code } =>
                write!(f, "[SIGIL] Validation Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::RuntimeError { message, hint, code } =>
                write!(f, "[SIGIL] Runtime Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for SigilError {}

impl SigilError {
    /// Helper for file-related errors when loading referenced documents.
    ///
    /// Keeps a consistent error code and a friendly default hint.
    pub fn file_error(message: String, path: String) -> Self {
        SigilError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(301),
        }
    }
}

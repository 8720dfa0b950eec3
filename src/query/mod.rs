// Author: Dustin Pilgrim
// License: MIT

use crate::SigilError;
use crate::value::Value;

mod segment;

use segment::Segment;

/// Evaluate a dot-delimited path against a document tree.
///
/// Each segment is a member key, a non-negative integer sequence index, or a
/// first-match predicate `#(field==literal)`. An empty path returns the
/// document root.
///
/// # Errors
/// Returns a `PathNotFound` error naming the full path and the failing
/// segment when any segment cannot be resolved.
pub fn get<'a>(document: &'a Value, path: &str) -> Result<&'a Value, SigilError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Ok(document);
    }

    let mut current = document;
    for raw in segment::split_segments(trimmed) {
        current = descend(current, &raw).ok_or_else(|| not_found(path, &raw))?;
    }
    Ok(current)
}

fn descend<'a>(value: &'a Value, raw: &str) -> Option<&'a Value> {
    match segment::parse(raw) {
        Segment::Key(key) => value.as_object()?.get(&key),
        Segment::Index(idx) => value.as_array()?.get(idx),
        Segment::Predicate { field, literal } => value
            .as_array()?
            .iter()
            .find(|element| predicate_matches(element, &field, &literal)),
    }
}

fn predicate_matches(element: &Value, field: &str, literal: &str) -> bool {
    match element.as_object().and_then(|m| m.get(field)) {
        Some(member) => literal_matches(member, literal),
        None => false,
    }
}

fn literal_matches(member: &Value, literal: &str) -> bool {
    // Quoted literals always compare as strings.
    if let Some(unquoted) = strip_quotes(literal) {
        return member.as_str() == Some(unquoted);
    }
    match member {
        Value::Number(n) => literal.parse::<f64>().is_ok_and(|lit| *n == lit),
        Value::Bool(b) => literal.parse::<bool>().is_ok_and(|lit| *b == lit),
        Value::String(s) => s == literal,
        _ => false,
    }
}

fn strip_quotes(literal: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if literal.len() >= 2 && literal.starts_with(quote) && literal.ends_with(quote) {
            return Some(&literal[1..literal.len() - 1]);
        }
    }
    None
}

fn not_found(path: &str, segment: &str) -> SigilError {
    SigilError::PathNotFound {
        message: format!("Path '{}' not found in document", path),
        path: path.to_string(),
        hint: Some(format!("No match for segment '{}'", segment)),
        code: Some(304),
    }
}

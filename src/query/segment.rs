use once_cell::sync::Lazy;
use regex::Regex;

static PREDICATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#\((?P<field>[^=]+)==(?P<value>.*)\)$").expect("predicate pattern"));

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Segment {
    Key(String),
    Index(usize),
    Predicate { field: String, literal: String },
}

/// Split a path on dots, keeping dots inside a predicate's parentheses
/// intact so quoted literals like `#(name=="a.b")` survive.
pub(super) fn split_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in path.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            '.' if depth == 0 => {
                segments.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    segments.push(current);
    segments
}

pub(super) fn parse(raw: &str) -> Segment {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(idx) = raw.parse::<usize>() {
            return Segment::Index(idx);
        }
    }
    if let Some(caps) = PREDICATE.captures(raw) {
        return Segment::Predicate {
            field: caps["field"].trim().to_string(),
            literal: caps["value"].trim().to_string(),
        };
    }
    Segment::Key(raw.to_string())
}

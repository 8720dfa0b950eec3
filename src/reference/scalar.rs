// Author: Dustin Pilgrim
// License: MIT

use super::{MergeMode, Ref, RefType, parse_mode};
use crate::SigilError;
use crate::utils::looks_like_locator;

pub(super) fn parse(input: &str) -> Result<Ref, SigilError> {
    // An empty scalar is a valid property reference to the document root.
    if input.is_empty() {
        return Ok(Ref {
            ref_type: RefType::Property,
            path: String::new(),
            file: String::new(),
            mode: MergeMode::Merge,
        });
    }

    // The $global:: prefix is authoritative regardless of what follows.
    if let Some(rest) = input.strip_prefix("$global::") {
        let (path, mode) = split_mode(rest)?;
        return Ok(Ref {
            ref_type: RefType::Global,
            path,
            file: String::new(),
            mode,
        });
    }

    if let Some((locator, rest)) = input.split_once("::") {
        if looks_like_locator(locator) {
            let (path, mode) = split_mode(rest)?;
            return Ok(Ref {
                ref_type: RefType::File,
                path,
                file: locator.to_string(),
                mode,
            });
        }
    }

    let (path, mode) = split_mode(input)?;
    Ok(Ref {
        ref_type: RefType::Property,
        path,
        file: String::new(),
        mode,
    })
}

/// Split a trailing `!<mode>` suffix off a path component.
fn split_mode(path: &str) -> Result<(String, MergeMode), SigilError> {
    match path.rsplit_once('!') {
        Some((head, token)) => Ok((head.to_string(), parse_mode(token)?)),
        None => Ok((path.to_string(), MergeMode::Merge)),
    }
}

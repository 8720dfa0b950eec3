// Author: Dustin Pilgrim
// License: MIT

use crate::SigilError;
use crate::reference::MergeMode;
use crate::value::Value;

/// Combine a resolved reference value with the inline value found at the
/// reference site, under the reference's merge mode.
///
/// An absent inline value means there is nothing to combine: the resolved
/// value passes through unchanged for every mode.
///
/// # Errors
/// Append mode fails unless both operands are arrays.
pub fn apply_merge_mode(
    mode: MergeMode,
    ref_value: &Value,
    inline_value: Option<&Value>,
) -> Result<Value, SigilError> {
    let Some(inline) = inline_value else {
        return Ok(ref_value.clone());
    };

    match mode {
        MergeMode::Replace => Ok(ref_value.clone()),
        MergeMode::Merge => Ok(merge_values(ref_value, inline)),
        MergeMode::Append => match (ref_value, inline) {
            (Value::Array(ref_items), Value::Array(inline_items)) => {
                Ok(concat(inline_items, ref_items))
            }
            _ => Err(SigilError::MergeError {
                message: "append mode requires both values to be slices".into(),
                hint: Some(format!(
                    "Got {} (inline) and {} (reference)",
                    inline.type_name(),
                    ref_value.type_name()
                )),
                code: Some(330),
            }),
        },
    }
}

/// Recursive merge rule: one-sided keys pass through, shared keys recurse,
/// arrays concatenate inline-first, and the reference side wins every leaf
/// conflict.
fn merge_values(ref_value: &Value, inline: &Value) -> Value {
    match (ref_value, inline) {
        (Value::Object(ref_map), Value::Object(inline_map)) => {
            let mut merged = inline_map.clone();
            for (key, rv) in ref_map {
                match merged.get_mut(key) {
                    Some(existing) => {
                        let combined = merge_values(rv, existing);
                        *existing = combined;
                    }
                    None => {
                        merged.insert(key.clone(), rv.clone());
                    }
                }
            }
            Value::Object(merged)
        }
        (Value::Array(ref_items), Value::Array(inline_items)) => concat(inline_items, ref_items),
        _ => ref_value.clone(),
    }
}

fn concat(first: &[Value], second: &[Value]) -> Value {
    Value::Array(first.iter().chain(second).cloned().collect())
}

// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;

use crate::{SigilError, Value};

impl TryFrom<Value> for String {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(SigilError::TypeError {
                message: format!("Expected string, got {:?}", value),
                hint: Some("Use a string value in your config".into()),
                code: Some(401),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as f32),
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as i32),
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as i64),
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u8 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u8::MAX as f64 {
                    Ok(n as u8)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for u8", n),
                        hint: Some("Use a number between 0 and 255".into()),
                        code: Some(407),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u16::MAX as f64 {
                    Ok(n as u16)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for u16", n),
                        hint: Some("Use a number between 0 and 65535".into()),
                        code: Some(403),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u32::MAX as f64 {
                    Ok(n as u32)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for u32", n),
                        hint: Some("Use a number between 0 and 4294967295".into()),
                        code: Some(408),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u64::MAX as f64 {
                    Ok(n as u64)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for u64", n),
                        hint: Some("Use a positive number within u64 range".into()),
                        code: Some(406),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for usize {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n.is_finite() {
                    Ok(n as usize)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for usize", n),
                        hint: Some("Use a positive integer".into()),
                        code: Some(409),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(SigilError::TypeError {
                message: format!("Expected boolean, got {:?}", value),
                hint: None,
                code: Some(404),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = SigilError>,
{
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let mut result = Vec::new();
                for item in items {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected array, got {:?}", value),
                hint: Some("Use an array [...] in your config".into()),
                code: Some(405),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = SigilError>,
{
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(None),
            v => Ok(Some(T::try_from(v)?)),
        }
    }
}

impl TryFrom<Value> for HashMap<String, Value> {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(SigilError::TypeError {
                message: format!("Expected object, got {:?}", value),
                hint: Some("Use a mapping in your config".into()),
                code: Some(410),
            }),
        }
    }
}

impl TryFrom<Value> for HashMap<String, String> {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => {
                let mut result = HashMap::new();
                for (key, val) in map {
                    let string_val = String::try_from(val)?;
                    result.insert(key, string_val);
                }
                Ok(result)
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected object, got {:?}", value),
                hint: Some("Use a mapping with string values".into()),
                code: Some(410),
            }),
        }
    }
}

impl TryFrom<Value> for (String, String) {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) if items.len() == 2 => {
                let first = String::try_from(items[0].clone())?;
                let second = String::try_from(items[1].clone())?;
                Ok((first, second))
            }
            _ => Err(SigilError::TypeError {
                message: "Expected array with exactly 2 string elements".into(),
                hint: Some("Use [\"key\", \"value\"] format".into()),
                code: Some(411),
            }),
        }
    }
}

impl TryFrom<Value> for (String, Value) {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) if items.len() == 2 => {
                let key = String::try_from(items[0].clone())?;
                let val = items[1].clone();
                Ok((key, val))
            }
            _ => Err(SigilError::TypeError {
                message: "Expected array with exactly 2 elements (key and value)".into(),
                hint: Some("Use [\"key\", value] format".into()),
                code: Some(411),
            }),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal used in a column's `DEFAULT` clause.
///
/// Text is quoted by the renderer's dialect; numbers are written as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DefaultValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl DefaultValue {
    pub fn is_text(&self) -> bool {
        matches!(self, DefaultValue::Text(_))
    }
}

/// Writes the bare value: no quotes around text, shortest form for numbers.
///
/// Non-finite reals are spelled `Infinity`, `-Infinity` and `NaN`.
impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Integer(v) => write!(f, "{v}"),
            DefaultValue::Real(v) if v.is_nan() => f.write_str("NaN"),
            DefaultValue::Real(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            DefaultValue::Real(v) => write!(f, "{v}"),
            DefaultValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Text(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::Text(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        DefaultValue::Integer(value.into())
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Integer(value)
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        DefaultValue::Real(value)
    }
}

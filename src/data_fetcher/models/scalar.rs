use serde::{Deserialize, Serialize};
use std::fmt;

/// A loosely typed JSON value as found in server API payloads.
///
/// Game servers report the same field as a number on one build and as a
/// string on another, so every optional field of a player record is kept as a
/// `Scalar` and only turned into text when rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    /// Arrays and objects are kept verbatim instead of failing the whole payload.
    Other(serde_json::Value),
}

impl Scalar {
    /// Whether the value counts as "present": non-empty text, a non-zero
    /// number, `true`, or a non-empty array/object.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Int(i) => *i != 0,
            Scalar::UInt(u) => *u != 0,
            Scalar::Float(f) => *f != 0.0,
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Other(value) => match value {
                serde_json::Value::Array(items) => !items.is_empty(),
                serde_json::Value::Object(map) => !map.is_empty(),
                serde_json::Value::Null => false,
                _ => true,
            },
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Capitalized, matching the bot's historical output
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::UInt(u) => write!(f, "{u}"),
            // Debug keeps the fractional part, so 100.0 renders as "100.0"
            Scalar::Float(v) => write!(f, "{v:?}"),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

/// Returns the text of the first truthy value, if any.
pub fn first_truthy<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = &'a Option<Scalar>>,
{
    values
        .into_iter()
        .flatten()
        .find(|value| value.is_truthy())
        .map(ToString::to_string)
}

//! The tagged form of a persisted JSON-in-text field.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A persisted field whose JSON may or may not have been decoded yet.
///
/// The backend stores `contents`, `tone_profile`, `metadata` and
/// `tone_results` as text columns. Some endpoints hand them over verbatim
/// (a JSON string), others decode them first (an array or object), and
/// unset columns come back as `null` or are omitted. Deserialization maps
/// those three cases onto the variants below; it never fails.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawBlob {
    /// The field arrived as a string, expected to hold encoded JSON.
    Text(String),
    /// The field arrived already decoded.
    Parsed(Value),
    /// The field was `null` or missing.
    #[default]
    Absent,
}

impl RawBlob {
    pub fn is_absent(&self) -> bool {
        matches!(self, RawBlob::Absent)
    }
}

impl From<Value> for RawBlob {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawBlob::Absent,
            Value::String(text) => RawBlob::Text(text),
            other => RawBlob::Parsed(other),
        }
    }
}

impl From<&str> for RawBlob {
    fn from(text: &str) -> Self {
        RawBlob::Text(text.to_string())
    }
}

impl<'de> Deserialize<'de> for RawBlob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<Value>::deserialize(deserializer)?
            .map(RawBlob::from)
            .unwrap_or_default())
    }
}

impl Serialize for RawBlob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawBlob::Text(text) => serializer.serialize_str(text),
            RawBlob::Parsed(value) => value.serialize(serializer),
            RawBlob::Absent => serializer.serialize_none(),
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend-assigned identifier.
///
/// Depending on the table, ids arrive as JSON numbers or strings. They are
/// only ever compared and interpolated into URLs on the client, so both are
/// held as their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Int(n) => RecordId(n.to_string()),
            Wire::Float(n) => RecordId(n.to_string()),
            Wire::Text(s) => RecordId(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_and_string_ids() {
        let from_number: RecordId = serde_json::from_str("42").unwrap();
        let from_string: RecordId = serde_json::from_str("\"c-42\"").unwrap();
        assert_eq!(from_number, RecordId::from(42));
        assert_eq!(from_string.as_str(), "c-42");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&RecordId::from(7)).unwrap();
        assert_eq!(json, "\"7\"");
    }
}

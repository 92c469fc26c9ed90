use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a field that fails to decode as the type's default.
///
/// `#[serde(default)]` only covers missing fields; the backend also sends
/// `null` and, on older rows, values of the wrong type.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Reads a list of labels. A JSON array keeps its string and number
/// elements; a string is split on commas; anything else is empty.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let labels = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(text) => text.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };
    Ok(labels
        .into_iter()
        .map(|label: String| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect())
}

/// Reads an optional timestamp. Strings are kept as-is, numbers become
/// their decimal text, anything else is `None`.
pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "or_default")]
        count: u32,
        #[serde(deserialize_with = "string_list")]
        tags: Vec<String>,
        #[serde(deserialize_with = "timestamp")]
        at: Option<String>,
    }

    fn row(value: Value) -> Row {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn wrong_types_become_defaults() {
        let decoded = row(json!({"count": "many", "tags": {"a": 1}, "at": true}));
        assert_eq!(decoded.count, 0);
        assert!(decoded.tags.is_empty());
        assert_eq!(decoded.at, None);
    }

    #[test]
    fn nulls_become_defaults() {
        let decoded = row(json!({"count": null, "tags": null, "at": null}));
        assert_eq!(decoded.count, 0);
        assert!(decoded.tags.is_empty());
        assert_eq!(decoded.at, None);
    }

    #[test]
    fn comma_separated_labels_are_split() {
        let decoded = row(json!({"tags": "email, linkedin,,"}));
        assert_eq!(decoded.tags, ["email", "linkedin"]);
    }

    #[test]
    fn mixed_arrays_keep_usable_labels() {
        let decoded = row(json!({"tags": ["email", 3, null, {"x": 1}, " "]}));
        assert_eq!(decoded.tags, ["email", "3"]);
    }

    #[test]
    fn numeric_timestamps_are_kept_as_text() {
        assert_eq!(row(json!({"at": 1735689600})).at.as_deref(), Some("1735689600"));
    }
}

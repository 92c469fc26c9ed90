use serde_json::{Map, Value};

use crate::model::blob::RawBlob;
use crate::model::campaign::CampaignMetadata;
use crate::normalize::{normalize, BlobReporter, Mapping};

/// Decodes the optional campaign `metadata` blob.
///
/// Returns `None` when the blob is absent, malformed, or carries none of
/// `title`, `boilerplate`, `objectives`; the view then skips the section.
pub fn resolve_metadata(raw: &RawBlob, reporter: &dyn BlobReporter) -> Option<CampaignMetadata> {
    let map = normalize::<Mapping>(raw, "metadata", reporter);
    let metadata = CampaignMetadata {
        title: text(&map, "title"),
        boilerplate: text(&map, "boilerplate"),
        objectives: text_list(map.get("objectives")),
    };
    (!metadata.is_empty()).then_some(metadata)
}

fn text(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Strings of a JSON list; a lone string counts as a one-element list.
/// Non-string elements are skipped.
pub(crate) fn text_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(single)) if !single.trim().is_empty() => vec![single.trim().to_string()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::CollectingReporter;
    use serde_json::json;

    #[test]
    fn decodes_full_metadata() {
        let reporter = CollectingReporter::new();
        let raw = RawBlob::from(
            r#"{"title":"Q3 Push","boilerplate":"Acme builds things.","objectives":["Leads","Awareness"]}"#,
        );
        let metadata = resolve_metadata(&raw, &reporter).unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Q3 Push"));
        assert_eq!(metadata.boilerplate.as_deref(), Some("Acme builds things."));
        assert_eq!(metadata.objectives, ["Leads", "Awareness"]);
    }

    #[test]
    fn absent_or_empty_metadata_is_omitted() {
        let reporter = CollectingReporter::new();
        assert_eq!(resolve_metadata(&RawBlob::Absent, &reporter), None);
        assert_eq!(resolve_metadata(&RawBlob::from("{}"), &reporter), None);
        assert_eq!(
            resolve_metadata(&RawBlob::Parsed(json!({"title": "  ", "objectives": []})), &reporter),
            None
        );
        assert!(reporter.is_empty());
    }

    #[test]
    fn malformed_metadata_is_omitted_and_reported() {
        let reporter = CollectingReporter::new();
        assert_eq!(resolve_metadata(&RawBlob::from("{title:"), &reporter), None);
        assert_eq!(resolve_metadata(&RawBlob::Parsed(json!(["x"])), &reporter), None);
        assert_eq!(reporter.fields(), ["metadata", "metadata"]);
    }

    #[test]
    fn objective_lists_are_lenient() {
        assert_eq!(text_list(Some(&json!(["a", 1, " ", "b"]))), ["a", "b"]);
        assert_eq!(text_list(Some(&json!("solo"))), ["solo"]);
        assert!(text_list(Some(&json!(3))).is_empty());
        assert!(text_list(None).is_empty());
    }
}

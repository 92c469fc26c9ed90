use serde_json::Value;

use crate::model::blob::RawBlob;
use crate::model::tone_analysis::{LanguagePatterns, ToneResults};
use crate::normalize::metadata::text_list;
use crate::normalize::tone_profile::profile_from_map;
use crate::normalize::{normalize, value_kind, BlobError, BlobReporter, Mapping};

const FIELD: &str = "tone_results";

/// Resolves a tone analysis' `tone_results` blob.
///
/// Sections that are missing or of the wrong type come back empty; a
/// wrong-typed section is reported.
pub fn resolve_tone_results(raw: &RawBlob, reporter: &dyn BlobReporter) -> ToneResults {
    let map = normalize::<Mapping>(raw, FIELD, reporter);

    let characteristics = match map.get("characteristics") {
        Some(Value::Object(traits)) => profile_from_map(traits, FIELD, reporter),
        other => {
            report_wrong_section(other, "characteristics", reporter);
            Default::default()
        }
    };

    let language_patterns = match map.get("language_patterns") {
        Some(Value::Object(patterns)) => LanguagePatterns {
            common_phrases: text_list(patterns.get("common_phrases")),
            other: patterns
                .iter()
                .filter(|(key, _)| key.as_str() != "common_phrases")
                .map(|(key, value)| (key.clone(), text_list(Some(value))))
                .filter(|(_, values)| !values.is_empty())
                .collect(),
        },
        other => {
            report_wrong_section(other, "language_patterns", reporter);
            LanguagePatterns::default()
        }
    };

    ToneResults {
        characteristics,
        language_patterns,
        recommended_content_types: text_list(map.get("recommended_content_types")),
        summary: map
            .get("summary")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    }
}

fn report_wrong_section(value: Option<&Value>, key: &str, reporter: &dyn BlobReporter) {
    if let Some(value) = value.filter(|v| !v.is_null()) {
        reporter.report(
            FIELD,
            &BlobError::InvalidEntry {
                key: key.to_string(),
                found: value_kind(value),
            },
        );
    }
}

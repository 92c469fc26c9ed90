use serde_json::{Map, Value};

use crate::model::blob::RawBlob;
use crate::model::tone::ToneProfile;
use crate::normalize::{normalize, value_kind, BlobError, BlobReporter, Mapping};

/// Resolves a campaign's `tone_profile` blob into a non-empty profile.
///
/// Numeric entries (JSON numbers or numeric strings) are rounded and
/// clamped to `0..=100`; anything else is dropped and reported. When
/// nothing usable remains, the fixed default profile is returned instead.
/// A usable profile is returned as-is, never merged with the defaults.
pub fn resolve_tone_profile(raw: &RawBlob, reporter: &dyn BlobReporter) -> ToneProfile {
    let map = normalize::<Mapping>(raw, "tone_profile", reporter);
    let profile = profile_from_map(&map, "tone_profile", reporter);
    if profile.is_empty() {
        ToneProfile::default_profile()
    } else {
        profile
    }
}

/// Converts a decoded mapping into a profile without applying defaults.
pub(crate) fn profile_from_map(
    map: &Map<String, Value>,
    field: &str,
    reporter: &dyn BlobReporter,
) -> ToneProfile {
    let mut profile = ToneProfile::default();
    for (key, value) in map {
        match intensity_of(value) {
            Some(intensity) => profile.insert(key.clone(), intensity),
            None => reporter.report(
                field,
                &BlobError::InvalidEntry {
                    key: key.clone(),
                    found: value_kind(value),
                },
            ),
        }
    }
    profile
}

fn intensity_of(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok()?,
        _ => return None,
    };
    raw.is_finite().then(|| raw.round().clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tone::ToneEntry;
    use crate::normalize::CollectingReporter;
    use serde_json::json;

    fn resolve(raw: RawBlob) -> ToneProfile {
        resolve_tone_profile(&raw, &CollectingReporter::new())
    }

    #[test]
    fn empty_or_missing_profiles_use_the_default() {
        assert_eq!(resolve(RawBlob::from("{}")), ToneProfile::default_profile());
        assert_eq!(resolve(RawBlob::Absent), ToneProfile::default_profile());
        assert_eq!(resolve(RawBlob::Parsed(json!({}))), ToneProfile::default_profile());
        assert_eq!(resolve(RawBlob::from("garbage")), ToneProfile::default_profile());
    }

    #[test]
    fn real_profiles_are_not_merged_with_defaults() {
        let profile = resolve(RawBlob::from(r#"{"bold":55}"#));
        let expected: ToneProfile = [ToneEntry::new("bold", 55)].into_iter().collect();
        assert_eq!(profile, expected);
        assert_eq!(profile.get("professional"), None);
    }

    #[test]
    fn blob_order_is_preserved() {
        let profile = resolve(RawBlob::from(r#"{"warm": 10, "bold": 90, "calm": 40}"#));
        let names: Vec<_> = profile.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["warm", "bold", "calm"]);
    }

    #[test]
    fn values_are_rounded_clamped_and_parsed() {
        let profile = resolve(RawBlob::Parsed(json!({
            "a": 54.6,
            "b": -3,
            "c": 180,
            "d": "72",
            "e": "35%"
        })));
        assert_eq!(profile.get("a"), Some(55));
        assert_eq!(profile.get("b"), Some(0));
        assert_eq!(profile.get("c"), Some(100));
        assert_eq!(profile.get("d"), Some(72));
        assert_eq!(profile.get("e"), Some(35));
    }

    #[test]
    fn unusable_entries_are_dropped_and_reported() {
        let reporter = CollectingReporter::new();
        let profile = resolve_tone_profile(
            &RawBlob::Parsed(json!({"bold": 60, "vibe": "chill", "nested": {"x": 1}})),
            &reporter,
        );
        assert_eq!(profile.len(), 1);
        assert_eq!(reporter.len(), 2);
        assert_eq!(reporter.reports()[0].message, "entry `vibe` has unusable value (string)");
    }

    #[test]
    fn all_entries_unusable_falls_back_to_default() {
        let profile = resolve(RawBlob::Parsed(json!({"vibe": "chill"})));
        assert!(profile.is_default());
    }
}

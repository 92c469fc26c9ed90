//! End-to-end decoding of campaign-factory payloads as the API returns
//! them, from the raw JSON array down to view models.

use chrono::{TimeZone, Utc};
use common::model::campaign::CampaignRecord;
use common::model::content::ContentKind;
use common::model::tone::ToneProfile;
use common::normalize::{CollectingReporter, ContentFilter};
use common::view::{CampaignView, ContentOrder};
use serde_json::json;

fn payload() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "user_id": "u-1",
            "name": "Encoded blobs",
            "objective": "Drive webinar signups",
            "target_audience": ["CMOs", "Growth leads"],
            "channels": ["email", "linkedin"],
            "timeline_start": "2025-01-01",
            "timeline_end": "2025-01-08",
            "created_at": "2025-01-01T09:00:00Z",
            "contents": "[{\"id\":1,\"type\":\"email\",\"title\":\"Invite\",\"deliveryDate\":\"2025-01-02\"},{\"id\":2,\"type\":\"webinar\",\"deliveryDate\":\"2025-01-07\"}]",
            "tone_profile": "{\"bold\":55}",
            "metadata": "{\"title\":\"Winter webinar\",\"objectives\":[\"Signups\"]}"
        },
        {
            "id": 2,
            "name": "Decoded blobs",
            "timeline_start": "2025-01-01",
            "timeline_end": "2025-01-15",
            "contents": [{"type": "social", "title": "Teaser"}, {"type": "blog"}],
            "tone_profile": {"friendly": 90, "direct": 35},
            "metadata": null
        },
        {
            "id": "3",
            "name": "Broken blobs",
            "timeline_start": "soon",
            "contents": "[{\"type\":",
            "tone_profile": "[1,2,3]",
            "metadata": 42
        }
    ])
}

fn views(reporter: &CollectingReporter) -> Vec<CampaignView> {
    let now = Utc.with_ymd_and_hms(2025, 1, 20, 9, 0, 0).unwrap();
    let records: Vec<CampaignRecord> = serde_json::from_value(payload()).unwrap();
    records
        .iter()
        .map(|record| CampaignView::build(record, now, reporter))
        .collect()
}

#[test]
fn encoded_blobs_are_decoded() {
    let reporter = CollectingReporter::new();
    let views = views(&reporter);
    let encoded = &views[0];

    assert_eq!(encoded.items.len(), 2);
    assert_eq!(encoded.items[1].display_title(), "Webinar Content");
    assert_eq!(encoded.tone.get("bold"), Some(55));
    assert_eq!(encoded.tone.len(), 1);
    assert_eq!(
        encoded.metadata.as_ref().and_then(|m| m.title.as_deref()),
        Some("Winter webinar")
    );
    assert_eq!(encoded.duration, "1 week");
    assert_eq!(encoded.created, "19 days ago");
}

#[test]
fn decoded_blobs_are_used_directly() {
    let reporter = CollectingReporter::new();
    let views = views(&reporter);
    let decoded = &views[1];

    assert_eq!(decoded.duration, "2 weeks");
    assert_eq!(decoded.metadata, None);
    let names: Vec<_> = decoded.tone.iter().map(|e| e.display_name()).collect();
    assert_eq!(names, ["Friendly", "Direct"]);

    let blogs = decoded.visible_items(&ContentFilter::parse("blog"), ContentOrder::Stored);
    assert_eq!(blogs.len(), 1);
    assert_eq!(blogs[0].kind, ContentKind::Blog);
}

#[test]
fn broken_blobs_render_with_fallbacks_and_are_reported() {
    let reporter = CollectingReporter::new();
    let views = views(&reporter);
    let broken = &views[2];

    assert!(broken.items.is_empty());
    assert_eq!(broken.tone, ToneProfile::default_profile());
    assert_eq!(broken.metadata, None);
    assert_eq!(broken.duration, "Unknown duration");
    assert_eq!(broken.created, "some time ago");

    assert_eq!(reporter.fields(), ["contents", "tone_profile", "metadata"]);
}

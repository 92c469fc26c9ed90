use serde::{Deserialize, Serialize};

use crate::metrics::dates::Timestamped;
use crate::model::blob::RawBlob;
use crate::model::lenient::{or_default, string_list, timestamp};
use crate::model::record_id::RecordId;

/// A campaign produced by the content factory, as returned by
/// `GET /api/campaign-factory`.
///
/// `contents`, `tone_profile` and `metadata` are kept raw here; views go
/// through [`crate::view::CampaignView`] to get typed values out of them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignRecord {
    #[serde(deserialize_with = "or_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "or_default")]
    pub user_id: Option<RecordId>,
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub objective: String,
    #[serde(deserialize_with = "string_list")]
    pub target_audience: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub channels: Vec<String>,
    /// Raw date string. `timeline_start <= timeline_end` is expected but
    /// not checked on the client.
    #[serde(deserialize_with = "timestamp")]
    pub timeline_start: Option<String>,
    #[serde(deserialize_with = "timestamp")]
    pub timeline_end: Option<String>,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: Option<String>,
    /// JSON sequence of content items.
    pub contents: RawBlob,
    /// JSON mapping of tone name to percentage.
    pub tone_profile: RawBlob,
    /// JSON `{title, boilerplate, objectives[]}`, often absent.
    pub metadata: RawBlob,
}

/// Decoded form of the campaign `metadata` blob.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CampaignMetadata {
    pub title: Option<String>,
    pub boilerplate: Option<String>,
    pub objectives: Vec<String>,
}

impl CampaignMetadata {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.boilerplate.is_none() && self.objectives.is_empty()
    }
}

/// A campaign from the older single-channel planner (`GET /api/campaigns`).
/// Only counted and listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyCampaign {
    #[serde(deserialize_with = "or_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub status: Option<String>,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: Option<String>,
}

impl Timestamped for CampaignRecord {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_partial_records_with_defaults() {
        let record: CampaignRecord = serde_json::from_value(json!({
            "id": 12,
            "name": "Spring launch",
            "contents": "[]",
            "tone_profile": {"bold": 55}
        }))
        .unwrap();

        assert_eq!(record.id, RecordId::from(12));
        assert!(record.channels.is_empty());
        assert_eq!(record.contents, RawBlob::Text("[]".into()));
        assert_eq!(record.tone_profile, RawBlob::Parsed(json!({"bold": 55})));
        assert!(record.metadata.is_absent());
    }

    #[test]
    fn explicit_nulls_become_defaults() {
        let record: CampaignRecord = serde_json::from_value(json!({
            "id": 1,
            "name": null,
            "channels": null,
            "metadata": null
        }))
        .unwrap();
        assert_eq!(record.name, "");
        assert!(record.channels.is_empty());
        assert!(record.metadata.is_absent());
    }

    #[test]
    fn wrong_typed_fields_do_not_fail_the_record() {
        let record: CampaignRecord = serde_json::from_value(json!({
            "id": null,
            "name": 7,
            "channels": "email,linkedin",
            "target_audience": {"cmo": true},
            "created_at": 1735689600
        }))
        .unwrap();
        assert_eq!(record.id, RecordId::default());
        assert_eq!(record.name, "");
        assert_eq!(record.channels, ["email", "linkedin"]);
        assert!(record.target_audience.is_empty());
        assert_eq!(record.created_at.as_deref(), Some("1735689600"));
    }

    #[test]
    fn ignores_unknown_fields() {
        let record: CampaignRecord =
            serde_json::from_value(json!({"id": "a", "billing_tier": "pro"})).unwrap();
        assert_eq!(record.id.as_str(), "a");
    }
}

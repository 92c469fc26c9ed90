use serde::{Deserialize, Serialize};

use crate::metrics::dates::Timestamped;
use crate::model::blob::RawBlob;
use crate::model::lenient::{or_default, timestamp};
use crate::model::record_id::RecordId;
use crate::model::tone::ToneProfile;
use crate::text::non_blank;

/// A saved tone analysis, from `GET /api/tone-analyses[/{id}]`.
///
/// Exactly one of `website_url` and `sample_text` is expected to be
/// meaningful, depending on how the analysis was submitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneAnalysisRecord {
    #[serde(deserialize_with = "or_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "or_default")]
    pub name: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub website_url: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub sample_text: Option<String>,
    /// Nested analysis output; see [`ToneResults`].
    pub tone_results: RawBlob,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: Option<String>,
}

impl ToneAnalysisRecord {
    /// The user-given name, else the analyzed URL, else `"Text sample"`.
    pub fn source_label(&self) -> String {
        non_blank(self.name.as_deref())
            .or_else(|| non_blank(self.website_url.as_deref()))
            .unwrap_or("Text sample")
            .to_string()
    }

    pub fn is_website(&self) -> bool {
        non_blank(self.website_url.as_deref()).is_some()
    }
}

impl Timestamped for ToneAnalysisRecord {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

/// Resolved form of a `tone_results` blob.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ToneResults {
    /// Tone name → percentage. Empty when the analysis returned none; no
    /// default is substituted here.
    pub characteristics: ToneProfile,
    pub language_patterns: LanguagePatterns,
    pub recommended_content_types: Vec<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LanguagePatterns {
    pub common_phrases: Vec<String>,
    /// Any other named pattern lists (e.g. `sentence_structure`), in blob
    /// order.
    pub other: Vec<(String, Vec<String>)>,
}

impl LanguagePatterns {
    pub fn is_empty(&self) -> bool {
        self.common_phrases.is_empty() && self.other.is_empty()
    }
}

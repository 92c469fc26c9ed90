//! Render-ready view models.
//!
//! A view model is rebuilt on every render from the fetched record. The
//! inputs are a handful of content items at most, so nothing is cached.

use chrono::{DateTime, Utc};

use crate::metrics::duration::campaign_duration;
use crate::metrics::intensity::Intensity;
use crate::metrics::time_ago::time_ago_opt;
use crate::model::campaign::{CampaignMetadata, CampaignRecord};
use crate::model::content::ContentItem;
use crate::model::record_id::RecordId;
use crate::model::tone::ToneProfile;
use crate::model::tone_analysis::{ToneAnalysisRecord, ToneResults};
use crate::normalize::contents::{
    filter_by_kind, project_contents, sort_by_delivery, sort_by_delivery_undated_last,
    ContentFilter,
};
use crate::normalize::{resolve_metadata, resolve_tone_profile, resolve_tone_results, BlobReporter};

/// How a campaign's content list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentOrder {
    /// As stored in the blob.
    #[default]
    Stored,
    /// By delivery date, undated items first.
    Chronological,
    /// By delivery date, undated items after the schedule.
    Timeline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignView {
    pub id: RecordId,
    pub name: String,
    pub objective: String,
    pub channels: Vec<String>,
    pub target_audience: Vec<String>,
    pub items: Vec<ContentItem>,
    pub tone: ToneProfile,
    pub metadata: Option<CampaignMetadata>,
    /// `"N weeks"` or `"Unknown duration"`.
    pub duration: String,
    /// Relative creation time.
    pub created: String,
}

impl CampaignView {
    pub fn build(record: &CampaignRecord, now: DateTime<Utc>, reporter: &dyn BlobReporter) -> Self {
        let name = match record.name.trim() {
            "" => "Untitled campaign".to_string(),
            name => name.to_string(),
        };
        Self {
            id: record.id.clone(),
            name,
            objective: record.objective.clone(),
            channels: record.channels.clone(),
            target_audience: record.target_audience.clone(),
            items: project_contents(&record.contents, reporter),
            tone: resolve_tone_profile(&record.tone_profile, reporter),
            metadata: resolve_metadata(&record.metadata, reporter),
            duration: campaign_duration(
                record.timeline_start.as_deref().unwrap_or_default(),
                record.timeline_end.as_deref().unwrap_or_default(),
            ),
            created: time_ago_opt(record.created_at.as_deref(), now),
        }
    }

    /// Items passing `filter`, in the requested order.
    pub fn visible_items(&self, filter: &ContentFilter, order: ContentOrder) -> Vec<ContentItem> {
        let mut items: Vec<ContentItem> = filter_by_kind(&self.items, filter)
            .into_iter()
            .cloned()
            .collect();
        match order {
            ContentOrder::Stored => {}
            ContentOrder::Chronological => sort_by_delivery(&mut items),
            ContentOrder::Timeline => sort_by_delivery_undated_last(&mut items),
        }
        items
    }

    pub fn scheduled_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_scheduled()).count()
    }
}

/// One characteristic of a tone analysis with its tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacteristicView {
    pub name: String,
    pub intensity: u8,
    pub level: Intensity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToneAnalysisView {
    pub id: RecordId,
    pub title: String,
    pub is_website: bool,
    pub results: ToneResults,
    pub created: String,
}

impl ToneAnalysisView {
    pub fn build(record: &ToneAnalysisRecord, now: DateTime<Utc>, reporter: &dyn BlobReporter) -> Self {
        Self {
            id: record.id.clone(),
            title: record.source_label(),
            is_website: record.is_website(),
            results: resolve_tone_results(&record.tone_results, reporter),
            created: time_ago_opt(record.created_at.as_deref(), now),
        }
    }

    /// Characteristics with display names, strongest first.
    pub fn characteristics(&self) -> Vec<CharacteristicView> {
        let mut traits: Vec<CharacteristicView> = self
            .results
            .characteristics
            .iter()
            .map(|entry| CharacteristicView {
                name: entry.display_name(),
                intensity: entry.intensity,
                level: entry.level(),
            })
            .collect();
        traits.sort_by(|a, b| b.intensity.cmp(&a.intensity));
        traits
    }
}

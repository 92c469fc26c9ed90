//! Runtime state of the campaigns page.

use common::model::campaign::CampaignRecord;
use common::model::record_id::RecordId;
use common::normalize::ContentFilter;
use common::view::ContentOrder;

/// Fields are `pub` because `update` and `view` both work on them.
pub struct CampaignsPage {
    /// Last successful fetch, newest first. Kept as-is when a later fetch
    /// or mutation fails.
    pub campaigns: Vec<CampaignRecord>,

    pub loading: bool,

    /// Message of the last failed fetch, shown instead of an empty list.
    pub load_error: Option<String>,

    /// Campaign whose details are expanded; one at a time.
    pub expanded: Option<RecordId>,

    /// Type filter and ordering of the expanded campaign's content list.
    pub filter: ContentFilter,
    pub order: ContentOrder,

    /// Campaign awaiting delete confirmation. The request is only sent
    /// once the user confirms.
    pub pending_delete: Option<RecordId>,

    /// A delete request is in flight.
    pub deleting: bool,

    /// Guard for the first-render fetch.
    pub loaded: bool,
}

impl CampaignsPage {
    pub fn new() -> Self {
        Self {
            campaigns: Vec::new(),
            loading: false,
            load_error: None,
            expanded: None,
            filter: ContentFilter::All,
            order: ContentOrder::Stored,
            pending_delete: None,
            deleting: false,
            loaded: false,
        }
    }

    pub fn find(&self, id: &RecordId) -> Option<&CampaignRecord> {
        self.campaigns.iter().find(|c| &c.id == id)
    }
}

use common::model::campaign::CampaignRecord;
use common::model::record_id::RecordId;
use common::normalize::ContentFilter;
use common::view::ContentOrder;

#[derive(Clone)]
pub enum Msg {
    Load,
    Loaded(Result<Vec<CampaignRecord>, String>),
    Toggle(RecordId),
    SetFilter(ContentFilter),
    SetOrder(ContentOrder),
    RequestDelete(RecordId),
    CancelDelete,
    ConfirmDelete,
    Deleted(Result<RecordId, String>),
}

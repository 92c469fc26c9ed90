use common::model::record_id::RecordId;
use common::model::tone_analysis::ToneAnalysisRecord;

#[derive(Clone)]
pub enum Msg {
    Load,
    Loaded(Result<Vec<ToneAnalysisRecord>, String>),

    // New-analysis form
    SetUrl(String),
    SetSample(String),
    SetName(String),
    Submit,
    Created(Result<ToneAnalysisRecord, String>),

    // Detail
    Select(RecordId),
    Selected(RecordId, Result<ToneAnalysisRecord, String>),
    CloseDetail,

    // Rename sheet
    OpenRename,
    EditRename(String),
    CancelRename,
    SaveRename,
    Renamed(Result<String, String>),
}

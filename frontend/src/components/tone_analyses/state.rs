//! Runtime state of the tone analyses page.

use common::model::draft::Draft;
use common::model::record_id::RecordId;
use common::model::tone_analysis::ToneAnalysisRecord;
use common::selection::PendingSelection;

/// Raw input of the new-analysis form. Validated into a
/// `CreateToneAnalysisRequest` only on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAnalysisForm {
    pub website_url: String,
    pub sample_text: String,
    pub name: String,
}

impl NewAnalysisForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct ToneAnalysesPage {
    /// History, newest first.
    pub analyses: Vec<ToneAnalysisRecord>,
    pub loading: bool,
    pub load_error: Option<String>,

    pub form: NewAnalysisForm,
    pub submitting: bool,

    /// Analysis shown in the detail panel, as last fetched.
    pub selected: Option<ToneAnalysisRecord>,
    /// Analysis whose detail is being fetched.
    pub selection: PendingSelection<RecordId>,

    /// Open rename sheet. `None` while the sheet is closed.
    pub rename: Option<Draft<String>>,
    pub renaming: bool,

    pub loaded: bool,
}

impl ToneAnalysesPage {
    pub fn new() -> Self {
        Self {
            analyses: Vec::new(),
            loading: false,
            load_error: None,
            form: NewAnalysisForm::default(),
            submitting: false,
            selected: None,
            selection: PendingSelection::new(),
            rename: None,
            renaming: false,
            loaded: false,
        }
    }

    pub fn selected_id(&self) -> Option<&RecordId> {
        self.selected.as_ref().map(|record| &record.id)
    }
}

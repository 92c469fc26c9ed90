pub mod campaigns;
pub mod content_library;
pub mod dashboard;
pub mod sheet;
pub mod tone_analyses;
pub mod tone_grid;

pub mod blob;
pub mod campaign;
pub mod content;
pub mod draft;
pub mod generated;
mod lenient;
pub mod persona;
pub mod record_id;
pub mod tone;
pub mod tone_analysis;

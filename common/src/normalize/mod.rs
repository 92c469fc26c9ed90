//! Defensive decoding of persisted JSON blobs.
//!
//! Every function here returns a typed value for any input. Failures are
//! never propagated; they are handed to a [`BlobReporter`] so callers
//! decide where diagnostics go (the `log` facade natively, the browser
//! console in the frontend, a vector in tests).

use std::cell::RefCell;

use thiserror::Error;

pub mod blob;
pub mod contents;
pub mod metadata;
pub mod records;
pub mod tone_profile;
pub mod tone_results;

pub use blob::{normalize, BlobShape, Mapping, Sequence};
pub use contents::{filter_by_kind, project_contents, sort_by_delivery, ContentFilter};
pub use metadata::resolve_metadata;
pub use records::decode_records;
pub use tone_profile::resolve_tone_profile;
pub use tone_results::resolve_tone_results;

/// Why a blob (or part of one) fell back to its default.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("could not decode {shape} blob: {source}")]
    Decode {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a {expected}, found {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("entry `{key}` has unusable value ({found})")]
    InvalidEntry { key: String, found: &'static str },

    #[error("record #{index} skipped: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Sink for recovered blob failures.
pub trait BlobReporter {
    /// Called once per recovered failure. `field` names the blob, e.g.
    /// `"tone_profile"`.
    fn report(&self, field: &str, error: &BlobError);
}

/// Forwards reports to the `log` facade at warn level, under the
/// `common::normalize` target. Whatever logger the binary installs
/// decides where they end up.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl BlobReporter for LogReporter {
    fn report(&self, field: &str, error: &BlobError) {
        log::warn!("malformed `{}` blob: {}", field, error);
    }
}

/// A recorded report: the blob field and the rendered error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub field: String,
    pub message: String,
}

/// Keeps every report in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    reports: RefCell<Vec<Report>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    pub fn fields(&self) -> Vec<String> {
        self.reports.borrow().iter().map(|r| r.field.clone()).collect()
    }
}

impl BlobReporter for CollectingReporter {
    fn report(&self, field: &str, error: &BlobError) {
        self.reports.borrow_mut().push(Report {
            field: field.to_string(),
            message: error.to_string(),
        });
    }
}

/// Short name of a JSON value's type, for diagnostics.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blob::RawBlob;
    use crate::model::tone::ToneProfile;
    use std::sync::{Mutex, Once};

    struct CapturingLogger {
        records: Mutex<Vec<(log::Level, String, String)>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.records.lock().unwrap().push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        records: Mutex::new(Vec::new()),
    };
    static INSTALL: Once = Once::new();

    fn install_logger() {
        INSTALL.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
        });
    }

    #[test]
    fn log_reporter_emits_a_warning_per_failure() {
        install_logger();

        let profile = resolve_tone_profile(&RawBlob::from("not json"), &LogReporter);

        assert_eq!(profile, ToneProfile::default_profile());
        let records = LOGGER.records.lock().unwrap();
        assert!(records.iter().any(|(level, target, message)| {
            *level == log::Level::Warn
                && target == "common::normalize"
                && message.starts_with("malformed `tone_profile` blob: could not decode mapping blob")
        }));
    }

    #[test]
    fn collecting_reporter_keeps_arrival_order() {
        let reporter = CollectingReporter::new();
        let _ = resolve_metadata(&RawBlob::from("[1]"), &reporter);
        let _ = resolve_tone_profile(&RawBlob::from("{"), &reporter);
        assert_eq!(reporter.fields(), ["metadata", "tone_profile"]);
    }
}

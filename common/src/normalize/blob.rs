//! The shape-directed blob normalizer.

use serde_json::{Map, Value};

use crate::model::blob::RawBlob;
use crate::normalize::{value_kind, BlobError, BlobReporter};

/// A container shape a blob can be normalized into.
pub trait BlobShape {
    type Output;

    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Takes the value if it already has this shape, otherwise hands it
    /// back.
    fn accept(value: Value) -> Result<Self::Output, Value>;

    fn empty() -> Self::Output;
}

/// An ordered sequence (JSON array).
pub struct Sequence;

impl BlobShape for Sequence {
    type Output = Vec<Value>;
    const NAME: &'static str = "sequence";

    fn accept(value: Value) -> Result<Self::Output, Value> {
        match value {
            Value::Array(items) => Ok(items),
            other => Err(other),
        }
    }

    fn empty() -> Self::Output {
        Vec::new()
    }
}

/// A key → value mapping (JSON object).
pub struct Mapping;

impl BlobShape for Mapping {
    type Output = Map<String, Value>;
    const NAME: &'static str = "mapping";

    fn accept(value: Value) -> Result<Self::Output, Value> {
        match value {
            Value::Object(map) => Ok(map),
            other => Err(other),
        }
    }

    fn empty() -> Self::Output {
        Map::new()
    }
}

/// Coerces `raw` into shape `S`.
///
/// - Absent, `null` and blank text give the empty container silently.
/// - Already-decoded values of the right shape are returned unchanged.
/// - Text is decoded and shape-checked.
///
/// Decode failures and shape mismatches give the empty container and are
/// reported under `field`.
pub fn normalize<S: BlobShape>(raw: &RawBlob, field: &str, reporter: &dyn BlobReporter) -> S::Output {
    let value = match raw {
        RawBlob::Absent | RawBlob::Parsed(Value::Null) => return S::empty(),
        RawBlob::Parsed(value) => value.clone(),
        RawBlob::Text(text) if text.trim().is_empty() => return S::empty(),
        RawBlob::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Null) => return S::empty(),
            Ok(value) => value,
            Err(source) => {
                reporter.report(field, &BlobError::Decode { shape: S::NAME, source });
                return S::empty();
            }
        },
    };

    S::accept(value).unwrap_or_else(|other| {
        reporter.report(
            field,
            &BlobError::ShapeMismatch {
                expected: S::NAME,
                found: value_kind(&other),
            },
        );
        S::empty()
    })
}

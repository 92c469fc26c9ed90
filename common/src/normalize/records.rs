use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::normalize::{BlobError, BlobReporter};

/// Decodes a list response one element at a time.
///
/// An element that cannot become a `T` (a bare string, a number, a record
/// the lenient field decoders still reject) is reported under `field` and
/// left out; the rest keep their order.
pub fn decode_records<T: DeserializeOwned>(
    values: Vec<Value>,
    field: &str,
    reporter: &dyn BlobReporter,
) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(source) => {
                reporter.report(field, &BlobError::InvalidRecord { index, source });
                None
            }
        })
        .collect()
}

use crate::metrics::dates::parse_date;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

pub const UNKNOWN_DURATION: &str = "Unknown duration";

/// Whole weeks spanned by a campaign timeline.
///
/// The distance is taken in absolute value, rounded up to whole days and
/// then up to whole weeks. `None` when either date does not parse.
pub fn duration_weeks(start: &str, end: &str) -> Option<i64> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    let millis = (end - start).num_milliseconds().abs();
    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    Some((days + 6) / 7)
}

/// `"1 week"`, `"N weeks"` (including `"0 weeks"`), or
/// `"Unknown duration"`.
pub fn campaign_duration(start: &str, end: &str) -> String {
    match duration_weeks(start, end) {
        Some(1) => "1 week".to_string(),
        Some(weeks) => format!("{weeks} weeks"),
        None => UNKNOWN_DURATION.to_string(),
    }
}

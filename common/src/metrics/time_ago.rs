//! Relative time labels ("3 days ago", "in about 2 hours").
//!
//! Buckets follow the usual distance-in-words convention. Months are
//! approximated as 30 days.

use chrono::{DateTime, Utc};

use crate::metrics::dates::parse_date;

pub const FALLBACK_LABEL: &str = "some time ago";

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Label for `timestamp` relative to `now`, or `"some time ago"` when the
/// timestamp does not parse.
pub fn time_ago(timestamp: &str, now: DateTime<Utc>) -> String {
    match parse_date(timestamp) {
        Some(then) => relative_label(then, now),
        None => FALLBACK_LABEL.to_string(),
    }
}

/// [`time_ago`] against the current clock.
pub fn time_ago_now(timestamp: &str) -> String {
    time_ago(timestamp, Utc::now())
}

/// Same as [`time_ago`] for optional fields.
pub fn time_ago_opt(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    timestamp.map_or_else(|| FALLBACK_LABEL.to_string(), |ts| time_ago(ts, now))
}

fn relative_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    let distance = distance_in_words(seconds.abs());
    if seconds >= 0 {
        format!("{distance} ago")
    } else {
        format!("in {distance}")
    }
}

fn distance_in_words(seconds: i64) -> String {
    let minutes = (seconds as f64 / 60.0).round() as i64;

    if minutes < 1 {
        return "less than a minute".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "minute");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / 60.0).round() as i64;
        return format!("about {}", plural(hours, "hour"));
    }
    if minutes < 2_520 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        return plural(days, "day");
    }
    let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
    if minutes < MINUTES_IN_TWO_MONTHS {
        return format!("about {}", plural(months, "month"));
    }
    if months < 12 {
        return plural(months, "month");
    }

    let whole_months = minutes / MINUTES_IN_MONTH;
    let years = whole_months / 12;
    match whole_months % 12 {
        0..=2 => format!("about {}", plural(years, "year")),
        3..=8 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

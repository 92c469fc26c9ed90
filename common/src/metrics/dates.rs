use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses the date formats the backend emits.
///
/// Accepts RFC 3339 timestamps, offset-less `YYYY-MM-DDTHH:MM[:SS[.fff]]`
/// (read as UTC, as are space-separated variants), and bare `YYYY-MM-DD`
/// (midnight UTC). Returns `None` for anything else, including blank input.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Records that carry a creation timestamp.
pub trait Timestamped {
    fn created_at(&self) -> Option<&str>;
}

/// Newest first. Records with a missing or unparseable timestamp go last,
/// keeping their relative order.
pub fn sort_newest_first<T: Timestamped>(records: &mut [T]) {
    records.sort_by_key(|record| {
        std::cmp::Reverse(record.created_at().and_then(parse_date))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_supported_formats() {
        let midnight = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2025-01-15"), Some(midnight));
        assert_eq!(parse_date("2025-01-15T00:00:00Z"), Some(midnight));
        assert_eq!(parse_date("2025-01-15T02:00:00+02:00"), Some(midnight));
        assert_eq!(parse_date("2025-01-15T00:00:00.000"), Some(midnight));
        assert_eq!(parse_date("2025-01-15 00:00:00"), Some(midnight));
        assert_eq!(parse_date(" 2025-01-15 "), Some(midnight));
    }

    #[test]
    fn accepts_datetimes_without_seconds() {
        let ten = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_date("2025-03-01T10:00"), Some(ten));
        assert_eq!(parse_date("2025-03-01 10:00"), Some(ten));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("2025-13-40"), None);
    }

    struct Stamp(Option<&'static str>);

    impl Timestamped for Stamp {
        fn created_at(&self) -> Option<&str> {
            self.0
        }
    }

    #[test]
    fn newest_first_puts_undated_last() {
        let mut stamps = vec![
            Stamp(Some("2024-05-01")),
            Stamp(None),
            Stamp(Some("2025-02-01")),
            Stamp(Some("garbage")),
        ];
        sort_newest_first(&mut stamps);
        let order: Vec<_> = stamps.iter().map(|s| s.0).collect();
        assert_eq!(
            order,
            [Some("2025-02-01"), Some("2024-05-01"), None, Some("garbage")]
        );
    }
}

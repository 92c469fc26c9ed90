//! Projection of the `contents` blob into typed items, plus the list views
//! built on it.

use crate::metrics::dates::parse_date;
use crate::model::blob::RawBlob;
use crate::model::content::{ContentItem, ContentKind};
use crate::normalize::{normalize, BlobReporter, Sequence};

/// Decodes a campaign's `contents` blob. Every element becomes an item,
/// in blob order; see [`ContentItem::from_value`].
pub fn project_contents(raw: &RawBlob, reporter: &dyn BlobReporter) -> Vec<ContentItem> {
    normalize::<Sequence>(raw, "contents", reporter)
        .iter()
        .map(ContentItem::from_value)
        .collect()
}

/// Type filter offered above a campaign's content list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentFilter {
    #[default]
    All,
    Kind(ContentKind),
}

impl ContentFilter {
    /// The choices shown in the filter bar, in display order.
    pub fn options() -> [ContentFilter; 5] {
        [
            ContentFilter::All,
            ContentFilter::Kind(ContentKind::Email),
            ContentFilter::Kind(ContentKind::Social),
            ContentFilter::Kind(ContentKind::Blog),
            ContentFilter::Kind(ContentKind::Webinar),
        ]
    }

    /// `"all"` (or blank) selects everything; any other value selects the
    /// matching kind.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("all") || value.trim().is_empty() {
            ContentFilter::All
        } else {
            ContentFilter::Kind(ContentKind::parse(value))
        }
    }

    pub fn label(&self) -> String {
        match self {
            ContentFilter::All => "All".to_string(),
            ContentFilter::Kind(kind) => kind.label(),
        }
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            ContentFilter::All => true,
            ContentFilter::Kind(kind) => item.kind == *kind,
        }
    }
}

/// Items accepted by `filter`, in their original relative order.
pub fn filter_by_kind<'a>(items: &'a [ContentItem], filter: &ContentFilter) -> Vec<&'a ContentItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Stable ascending sort on delivery date.
///
/// A missing or unparseable date counts as the Unix epoch, so undated
/// items come before every dated item from 1970 on.
pub fn sort_by_delivery(items: &mut [ContentItem]) {
    items.sort_by_key(|item| {
        delivery_time(item)
            .map(|t| t.timestamp_millis())
            .unwrap_or(0)
    });
}

/// Stable ascending sort on delivery date with undated items last, as the
/// campaign timeline lists them.
pub fn sort_by_delivery_undated_last(items: &mut [ContentItem]) {
    items.sort_by_key(|item| {
        let time = delivery_time(item);
        (time.is_none(), time)
    });
}

fn delivery_time(item: &ContentItem) -> Option<chrono::DateTime<chrono::Utc>> {
    item.delivery_date.as_deref().and_then(parse_date)
}

/// Case-insensitive substring search over several text fields. A blank
/// query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || fields
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::CollectingReporter;
    use serde_json::json;

    fn item(kind: ContentKind, date: Option<&str>, title: &str) -> ContentItem {
        ContentItem {
            kind,
            delivery_date: date.map(str::to_string),
            title: Some(title.to_string()),
            ..ContentItem::default()
        }
    }

    fn titles(items: &[ContentItem]) -> Vec<String> {
        items.iter().map(ContentItem::display_title).collect()
    }

    #[test]
    fn projects_string_and_parsed_blobs_alike() {
        let reporter = CollectingReporter::new();
        let encoded = RawBlob::from(r#"[{"type":"email","title":"A"},{"type":"blog"}]"#);
        let decoded = RawBlob::Parsed(json!([{"type":"email","title":"A"},{"type":"blog"}]));

        let from_text = project_contents(&encoded, &reporter);
        let from_value = project_contents(&decoded, &reporter);
        assert_eq!(from_text, from_value);
        assert_eq!(titles(&from_text), ["A", "Blog Content"]);
        assert!(reporter.is_empty());
    }

    #[test]
    fn malformed_contents_project_to_nothing() {
        let reporter = CollectingReporter::new();
        assert!(project_contents(&RawBlob::from("[{oops"), &reporter).is_empty());
        assert!(project_contents(&RawBlob::Parsed(json!({"type": "email"})), &reporter).is_empty());
        assert_eq!(reporter.len(), 2);
    }

    #[test]
    fn undated_items_sort_as_epoch() {
        let mut items = vec![
            item(ContentKind::Email, Some("2025-03-01"), "march"),
            item(ContentKind::Email, None, "undated"),
            item(ContentKind::Email, Some("2025-01-15"), "january"),
        ];
        sort_by_delivery(&mut items);
        assert_eq!(titles(&items), ["undated", "january", "march"]);
    }

    #[test]
    fn unparseable_dates_sort_with_undated_items_stably() {
        let mut items = vec![
            item(ContentKind::Blog, Some("2025-02-01"), "feb"),
            item(ContentKind::Blog, Some("someday"), "someday"),
            item(ContentKind::Blog, None, "none"),
        ];
        sort_by_delivery(&mut items);
        assert_eq!(titles(&items), ["someday", "none", "feb"]);
    }

    #[test]
    fn timeline_sort_puts_undated_last() {
        let mut items = vec![
            item(ContentKind::Email, Some("2025-03-01"), "march"),
            item(ContentKind::Email, None, "undated"),
            item(ContentKind::Email, Some("2025-01-15"), "january"),
        ];
        sort_by_delivery_undated_last(&mut items);
        assert_eq!(titles(&items), ["january", "march", "undated"]);
    }

    #[test]
    fn kind_filter_keeps_relative_order() {
        let items = vec![
            item(ContentKind::Email, None, "e1"),
            item(ContentKind::Social, None, "s1"),
            item(ContentKind::Email, None, "e2"),
            item(ContentKind::Other("podcast".into()), None, "p1"),
        ];

        let emails = filter_by_kind(&items, &ContentFilter::parse("email"));
        let email_titles: Vec<_> = emails.iter().map(|i| i.display_title()).collect();
        assert_eq!(email_titles, ["e1", "e2"]);

        let all = filter_by_kind(&items, &ContentFilter::parse("all"));
        assert_eq!(all.len(), items.len());
        assert!(all.iter().zip(&items).all(|(a, b)| *a == b));

        assert!(filter_by_kind(&items, &ContentFilter::Kind(ContentKind::Webinar)).is_empty());
    }

    #[test]
    fn filter_options_and_labels() {
        let labels: Vec<_> = ContentFilter::options().iter().map(ContentFilter::label).collect();
        assert_eq!(labels, ["All", "Email", "Social", "Blog", "Webinar"]);
        assert_eq!(ContentFilter::parse(""), ContentFilter::All);
        assert_eq!(ContentFilter::parse("ALL"), ContentFilter::All);
    }

    #[test]
    fn query_matching() {
        assert!(matches_query("", &["anything"]));
        assert!(matches_query("  ", &[]));
        assert!(matches_query("LAUNCH", &["body", "Product launch"]));
        assert!(!matches_query("webinar", &["body", "topic"]));
    }
}

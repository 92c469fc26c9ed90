use serde::{Deserialize, Serialize};

use crate::metrics::dates::Timestamped;
use crate::model::content::ContentKind;
use crate::model::lenient::{or_default, timestamp};
use crate::model::record_id::RecordId;
use crate::normalize::contents::matches_query;

/// A single piece of generated copy (LinkedIn post, email, webinar
/// outline), from `GET /api/content`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedContent {
    #[serde(deserialize_with = "or_default")]
    pub id: RecordId,
    #[serde(alias = "type", alias = "contentType")]
    #[serde(deserialize_with = "or_default")]
    pub content_type: String,
    #[serde(deserialize_with = "or_default")]
    pub topic: String,
    #[serde(deserialize_with = "or_default")]
    pub content: String,
    #[serde(deserialize_with = "or_default")]
    pub persona_id: Option<RecordId>,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: Option<String>,
}

impl GeneratedContent {
    pub fn kind(&self) -> ContentKind {
        ContentKind::parse(&self.content_type)
    }

    /// Topic, or the first line of the body when the topic is blank.
    pub fn heading(&self) -> String {
        let topic = self.topic.trim();
        if !topic.is_empty() {
            return topic.to_string();
        }
        self.content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl Timestamped for GeneratedContent {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

/// Entries whose body or topic contains `query`, case-insensitively, in
/// their original order.
pub fn search_generated<'a>(items: &'a [GeneratedContent], query: &str) -> Vec<&'a GeneratedContent> {
    items
        .iter()
        .filter(|item| matches_query(query, &[item.content.as_str(), item.topic.as_str()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(topic: &str, content: &str) -> GeneratedContent {
        GeneratedContent {
            topic: topic.to_string(),
            content: content.to_string(),
            ..GeneratedContent::default()
        }
    }

    #[test]
    fn accepts_type_alias() {
        let item: GeneratedContent =
            serde_json::from_value(json!({"id": 1, "type": "social", "topic": "Launch"})).unwrap();
        assert_eq!(item.kind(), ContentKind::Social);
    }

    #[test]
    fn searches_body_and_topic() {
        let items = vec![
            entry("Product launch", "Big news today"),
            entry("Hiring", "We are growing the LAUNCH team"),
            entry("Webinar recap", "Thanks for joining"),
        ];
        let hits: Vec<_> = search_generated(&items, "launch")
            .into_iter()
            .map(|i| i.topic.as_str())
            .collect();
        assert_eq!(hits, ["Product launch", "Hiring"]);
        assert_eq!(search_generated(&items, "").len(), 3);
        assert!(search_generated(&items, "pricing").is_empty());
    }

    #[test]
    fn heading_falls_back_to_first_line() {
        assert_eq!(entry("", "\n  First line\nSecond").heading(), "First line");
        assert_eq!(entry(" ", "").heading(), "Untitled");
        assert_eq!(entry("Topic", "Body").heading(), "Topic");
    }
}

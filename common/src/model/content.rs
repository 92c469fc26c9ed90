//! Campaign content items.
//!
//! Items only exist inside a campaign's `contents` blob. They are decoded
//! leniently: the factory has emitted several shapes over time, and the
//! views substitute placeholders for anything missing rather than hiding
//! the item.

use serde_json::{Map, Value};

use crate::metrics::dates::parse_date;
use crate::text::capitalize;

/// The deliverable type of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ContentKind {
    Email,
    Social,
    Blog,
    Webinar,
    /// Anything outside the known set, kept verbatim.
    Other(String),
    #[default]
    Unspecified,
}

impl ContentKind {
    /// Parses a wire `type` value. Matching ignores case and surrounding
    /// whitespace.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "email" => ContentKind::Email,
            "social" => ContentKind::Social,
            "blog" => ContentKind::Blog,
            "webinar" => ContentKind::Webinar,
            "" => ContentKind::Unspecified,
            _ => ContentKind::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::Email => "email",
            ContentKind::Social => "social",
            ContentKind::Blog => "blog",
            ContentKind::Webinar => "webinar",
            ContentKind::Other(other) => other,
            ContentKind::Unspecified => "",
        }
    }

    pub fn label(&self) -> String {
        match self {
            ContentKind::Other(other) => capitalize(other),
            ContentKind::Unspecified => "Content".to_string(),
            known => capitalize(known.as_str()),
        }
    }

    /// Material icon name for the kind.
    pub fn icon(&self) -> &'static str {
        match self {
            ContentKind::Email => "mail",
            ContentKind::Social => "share",
            ContentKind::Blog => "article",
            ContentKind::Webinar => "videocam",
            ContentKind::Other(_) | ContentKind::Unspecified => "description",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ContentKind::Other(_) | ContentKind::Unspecified)
    }
}

/// One deliverable inside a campaign.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentItem {
    pub id: Option<String>,
    pub kind: ContentKind,
    pub title: Option<String>,
    pub content: Option<String>,
    pub persona: Option<String>,
    /// ISO date string as stored; may be unparseable.
    pub delivery_date: Option<String>,
    pub channel: Option<String>,
}

impl ContentItem {
    /// Builds an item from one element of the `contents` sequence.
    ///
    /// Objects are read field by field, with wrong-typed or empty fields
    /// treated as missing. A bare string becomes an item with that body.
    /// Any other value yields an empty item, which still renders with
    /// placeholders.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(object) => ContentItem {
                id: scalar_field(object, &["id"]),
                kind: text_field(object, &["type", "contentType", "content_type"])
                    .map(|kind| ContentKind::parse(&kind))
                    .unwrap_or_default(),
                title: text_field(object, &["title"]),
                content: text_field(object, &["content", "body"]),
                persona: text_field(object, &["persona"]),
                delivery_date: text_field(object, &["deliveryDate", "delivery_date"]),
                channel: text_field(object, &["channel"]),
            },
            Value::String(body) if !body.trim().is_empty() => ContentItem {
                content: Some(body.clone()),
                ..ContentItem::default()
            },
            _ => ContentItem::default(),
        }
    }

    /// The title, or `"<Type> Content"` when the item has none.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None if self.kind == ContentKind::Unspecified => "Content".to_string(),
            None => format!("{} Content", self.kind.label()),
        }
    }

    /// `"Unscheduled"` without a date, `Mar 1, 2025` for a parseable one,
    /// and the stored string otherwise.
    pub fn delivery_label(&self) -> String {
        match &self.delivery_date {
            None => "Unscheduled".to_string(),
            Some(raw) => match parse_date(raw) {
                Some(date) => date.format("%b %-d, %Y").to_string(),
                None => raw.clone(),
            },
        }
    }

    pub fn persona_label(&self) -> &str {
        self.persona.as_deref().unwrap_or("General audience")
    }

    pub fn body(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn is_scheduled(&self) -> bool {
        self.delivery_date.as_deref().and_then(parse_date).is_some()
    }

    /// Render key for the item at `index` of a list. Blob ids are not
    /// unique, so the position is always part of the key.
    pub fn list_key(&self, index: usize) -> String {
        match &self.id {
            Some(id) => format!("{index}-{id}"),
            None => index.to_string(),
        }
    }
}

fn text_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match object.get(*key) {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
        _ => None,
    })
}

fn scalar_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match object.get(*key) {
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_object_items() {
        let item = ContentItem::from_value(&json!({
            "id": 3,
            "type": "Email",
            "title": "Welcome",
            "content": "Hi there",
            "persona": "CMO",
            "deliveryDate": "2025-03-01",
            "channel": "Newsletter"
        }));

        assert_eq!(item.id.as_deref(), Some("3"));
        assert_eq!(item.kind, ContentKind::Email);
        assert_eq!(item.display_title(), "Welcome");
        assert_eq!(item.delivery_label(), "Mar 1, 2025");
        assert_eq!(item.channel.as_deref(), Some("Newsletter"));
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let item = ContentItem::from_value(&json!({"type": "webinar", "title": ""}));
        assert_eq!(item.display_title(), "Webinar Content");
        assert_eq!(item.delivery_label(), "Unscheduled");
        assert_eq!(item.persona_label(), "General audience");
        assert_eq!(item.body(), "");
    }

    #[test]
    fn wrong_typed_fields_are_treated_as_missing() {
        let item = ContentItem::from_value(&json!({"type": 4, "title": ["x"], "deliveryDate": 0}));
        assert_eq!(item.kind, ContentKind::Unspecified);
        assert_eq!(item.title, None);
        assert_eq!(item.delivery_date, None);
        assert_eq!(item.display_title(), "Content");
    }

    #[test]
    fn non_object_elements_still_produce_items() {
        let from_text = ContentItem::from_value(&json!("Plain copy"));
        assert_eq!(from_text.body(), "Plain copy");

        let from_number = ContentItem::from_value(&json!(17));
        assert_eq!(from_number, ContentItem::default());
    }

    #[test]
    fn unknown_kinds_fall_back_to_generic_icon() {
        let kind = ContentKind::parse("podcast");
        assert_eq!(kind, ContentKind::Other("podcast".into()));
        assert_eq!(kind.icon(), "description");
        assert_eq!(kind.label(), "Podcast");
        assert!(!kind.is_known());
        assert_eq!(ContentKind::parse(" SOCIAL ").icon(), "share");
    }

    #[test]
    fn list_keys_stay_unique_for_repeated_ids() {
        let items: Vec<ContentItem> = [json!({"id": 1}), json!({"id": 1}), json!("text")]
            .iter()
            .map(ContentItem::from_value)
            .collect();
        let keys: Vec<String> = items.iter().enumerate().map(|(i, item)| item.list_key(i)).collect();
        assert_eq!(keys, ["0-1", "1-1", "2"]);
    }

    #[test]
    fn unparseable_delivery_date_is_shown_verbatim() {
        let item = ContentItem::from_value(&json!({"deliveryDate": "next Tuesday"}));
        assert_eq!(item.delivery_label(), "next Tuesday");
        assert!(!item.is_scheduled());
    }
}

//! Request payloads sent to the REST API, validated before dispatch.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::text::non_blank;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Enter a website URL or paste a text sample to analyze.")]
    MissingSource,

    #[error("Choose either a website URL or a text sample, not both.")]
    AmbiguousSource,

    #[error("The website URL must start with http:// or https://.")]
    InvalidUrl,

    #[error("The name cannot be empty.")]
    EmptyName,
}

/// Body of `POST /api/tone-analysis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateToneAnalysisRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreateToneAnalysisRequest {
    /// Builds a request from raw form input. Exactly one of `website_url`
    /// and `sample_text` must be non-blank; blank fields are omitted.
    pub fn new(website_url: &str, sample_text: &str, name: &str) -> Result<Self, RequestError> {
        let url = non_blank(Some(website_url));
        let text = non_blank(Some(sample_text));

        match (url, text) {
            (None, None) => Err(RequestError::MissingSource),
            (Some(_), Some(_)) => Err(RequestError::AmbiguousSource),
            (Some(url), None) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                Err(RequestError::InvalidUrl)
            }
            (url, text) => Ok(Self {
                website_url: url.map(str::to_string),
                sample_text: text.map(str::to_string),
                name: non_blank(Some(name)).map(str::to_string),
            }),
        }
    }
}

/// Body of `PATCH /api/tone-analyses/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    pub name: String,
}

impl RenameRequest {
    pub fn new(name: &str) -> Result<Self, RequestError> {
        non_blank(Some(name))
            .map(|name| Self {
                name: name.to_string(),
            })
            .ok_or(RequestError::EmptyName)
    }
}

/// Extracts a human-readable message from an error response body.
///
/// The API answers failures with `{"message": ...}` or `{"error": ...}`
/// (the latter sometimes nested as `{"error": {"message": ...}}`); other
/// bodies are returned trimmed, and an empty body yields `None`.
pub fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        let candidate = value
            .get("message")
            .or_else(|| value.get("error").and_then(|e| e.get("message")))
            .or_else(|| value.get("error"));
        candidate.and_then(Value::as_str).map(str::to_string)
    });
    Some(from_json.unwrap_or_else(|| body.to_string()))
}

//! REST client for the Brand Studio API.
//!
//! One async function per endpoint. Every call resolves to
//! `Result<_, ApiError>`; failures are logged to the console here, and
//! components turn them into toasts. No retry or cancellation: a stale
//! response simply triggers a re-render with whatever it carried.

use common::model::campaign::{CampaignRecord, LegacyCampaign};
use common::model::generated::GeneratedContent;
use common::model::persona::Persona;
use common::model::record_id::RecordId;
use common::model::tone_analysis::ToneAnalysisRecord;
use common::normalize::{decode_records, LogReporter};
use common::requests::{error_message, CreateToneAnalysisRequest, RenameRequest};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::api_url;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{body} (HTTP {status})")]
    Status { status: u16, body: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

pub async fn fetch_campaigns() -> Result<Vec<CampaignRecord>, ApiError> {
    get_list("/api/campaign-factory").await
}

pub async fn delete_campaign(id: &RecordId) -> Result<(), ApiError> {
    let path = format!("/api/campaign-factory/{}", id);
    let response = Request::delete(&api_url(&path))
        .send()
        .await
        .map_err(|e| network_error(&path, e))?;
    ensure_ok(&path, response).await.map(|_| ())
}

pub async fn fetch_tone_analyses() -> Result<Vec<ToneAnalysisRecord>, ApiError> {
    get_list("/api/tone-analyses").await
}

pub async fn fetch_tone_analysis(id: &RecordId) -> Result<ToneAnalysisRecord, ApiError> {
    get_json(&format!("/api/tone-analyses/{}", id)).await
}

pub async fn create_tone_analysis(
    request: &CreateToneAnalysisRequest,
) -> Result<ToneAnalysisRecord, ApiError> {
    let path = "/api/tone-analysis";
    let response = Request::post(&api_url(path))
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    decode(path, ensure_ok(path, response).await?).await
}

pub async fn rename_tone_analysis(id: &RecordId, request: &RenameRequest) -> Result<(), ApiError> {
    let path = format!("/api/tone-analyses/{}", id);
    let response = Request::patch(&api_url(&path))
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| network_error(&path, e))?;
    ensure_ok(&path, response).await.map(|_| ())
}

pub async fn fetch_personas() -> Result<Vec<Persona>, ApiError> {
    get_list("/api/personas").await
}

pub async fn fetch_generated_content() -> Result<Vec<GeneratedContent>, ApiError> {
    get_list("/api/content").await
}

pub async fn fetch_legacy_campaigns() -> Result<Vec<LegacyCampaign>, ApiError> {
    get_list("/api/campaigns").await
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    decode(path, ensure_ok(path, response).await?).await
}

/// Fetches a JSON array and decodes it record by record. Elements that
/// cannot be decoded are logged and skipped instead of failing the page.
async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let values: Vec<Value> = get_json(path).await?;
    Ok(decode_records(values, path, &LogReporter))
}

/// Passes 2xx responses through and turns anything else into
/// `ApiError::Status` carrying the server's message.
async fn ensure_ok(path: &str, response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let body = error_message(&body).unwrap_or_else(|| response.status_text());
    gloo_console::error!(format!("{} failed with HTTP {}: {}", path, status, body));
    Err(ApiError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        gloo_console::error!(format!("{} returned an unreadable body: {}", path, e));
        ApiError::Decode(e.to_string())
    })
}

fn network_error(path: &str, error: gloo_net::Error) -> ApiError {
    gloo_console::error!(format!("{} could not be reached: {}", path, error));
    ApiError::Network(error.to_string())
}

//! API utilities for frontend-backend communication
//!
//! URL construction plus thin JSON helpers over `gloo-net` that turn transport
//! failures, non-2xx statuses and undecodable bodies into [`ApiError`].

use contracts::domain::common::ErrorDetail;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::config;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx status; `detail` is the backend's `{"detail": ...}` when present
    #[error("{}", http_message(.status, .detail))]
    Http { status: u16, detail: Option<String> },
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// 2xx with `success: false`
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Backend-provided message, or `fallback` when the server said nothing useful.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Http { detail: None, .. } => fallback.to_string(),
            ApiError::Rejected(msg) if !msg.trim().is_empty() => msg.clone(),
            ApiError::Rejected(_) => fallback.to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

fn http_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("HTTP error: {}", status),
    }
}

/// Build an [`ApiError::Http`] from a status code and the raw error body.
pub fn http_error(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorDetail>(body)
        .ok()
        .and_then(|e| e.detail)
        .filter(|d| !d.trim().is_empty());
    ApiError::Http { status, detail }
}

/// Get the base URL for API requests
///
/// Uses the configured `api.base_url`, or the page origin when it is empty
/// (the backend serves the UI itself).
pub fn api_base() -> String {
    let configured = config().api.base_url.trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/filter-chassis");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(http_error(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a JSON body and decode a JSON answer.
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST where only the status matters.
pub async fn post_ignore_body<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(http_error(status, &body))
    }
}

/// GET that only reports whether the server answered 2xx.
pub async fn probe(path: &str) -> bool {
    match Request::get(&api_url(path)).send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_surfaces_detail() {
        let err = http_error(400, r#"{"detail": "Chassis not found in inventory"}"#);
        assert_eq!(err.to_string(), "Chassis not found in inventory");
        assert_eq!(
            err.message_or("Failed to generate bill"),
            "Chassis not found in inventory"
        );
    }

    #[test]
    fn test_http_error_without_detail_uses_fallback() {
        let err = http_error(500, "Internal Server Error");
        assert_eq!(err.to_string(), "HTTP error: 500");
        assert_eq!(err.message_or("Failed to generate bill"), "Failed to generate bill");

        // FastAPI validation errors carry a list, not a string
        let err = http_error(422, r#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#);
        assert_eq!(err, ApiError::Http { status: 422, detail: None });
    }

    #[test]
    fn test_rejected_message() {
        assert_eq!(
            ApiError::Rejected(String::new()).message_or("Bill generation failed"),
            "Bill generation failed"
        );
        assert_eq!(
            ApiError::Rejected("Template missing".into()).message_or("Bill generation failed"),
            "Template missing"
        );
        assert!(ApiError::Network("offline".into()).is_network());
    }
}

//! API utilities for talking to the back-office CMS
//!
//! Provides helper functions for constructing API URLs and reading error
//! bodies of failed requests.

use crate::shared::config::AppConfig;
use contracts::domain::common::{EntityKey, EntityRoot};
use contracts::shared::api_response::ApiErrorBody;
use gloo_net::http::Response;

/// Get the versioned base URL for API requests
///
/// # Returns
/// - API root like "http://localhost:3000/api/v1"
pub fn api_base() -> String {
    AppConfig::from_env().api_url()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/projects");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Collection URL of an entity, e.g. ".../v1/projects"
pub fn collection_url<E: EntityRoot>() -> String {
    api_url(&format!("/{}", E::collection_name()))
}

/// Record URL of an entity; the key is percent-encoded as one path segment
pub fn record_url<E: EntityRoot>(key: &E::Key) -> String {
    format!(
        "{}/{}",
        collection_url::<E>(),
        urlencoding::encode(&key.as_string())
    )
}

/// Turn a non-2xx response into a message, preferring the server's `message`
pub async fn error_message(response: Response, fallback: &str) -> String {
    let status = response.status();
    let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
    let message = body.message_or(fallback);
    log::error!("HTTP {}: {}", status, message);
    message
}

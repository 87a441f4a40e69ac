//! HTTP utilities for OpenDota API communication

use crate::{Result, API_KEY_ENV_VAR, BASE_URL_ENV_VAR, OPENDOTA_BASE_URL};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

/// Build the shared HTTP client.
///
/// Transport settings (TLS, timeouts, retries) are left at reqwest's defaults.
pub fn build_http_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .user_agent(concat!("top-teams/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Resolve the API base URL: explicit value, then `OPENDOTA_BASE_URL`, then the public API.
///
/// Trailing slashes are stripped so paths can be appended directly.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    let url = base_url
        .filter(|u| !u.trim().is_empty())
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| OPENDOTA_BASE_URL.to_string());
    url.trim().trim_end_matches('/').to_string()
}

/// Read `OPENDOTA_API_KEY`, if present and non-empty.
///
/// Returns `None` for anonymous access.
pub fn maybe_api_key() -> Option<String> {
    std::env::var(API_KEY_ENV_VAR)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

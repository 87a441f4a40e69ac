use std::future::Future;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::cli::types::ids::TeamId;
use crate::core::{build_http_client, maybe_api_key};
use crate::opendota::types::{PlayerInput, Team};
use crate::{Result, OPENDOTA_BASE_URL};


/// The two OpenDota endpoints the pipeline reads.
///
/// Futures are `Send` so team fetches can run on spawned tasks.
pub trait OpenDotaApi: Send + Sync {
    /// `GET /proPlayers`
    fn pro_players(&self) -> impl Future<Output = Result<Vec<PlayerInput>>> + Send;

    /// `GET /teams/{id}`
    fn team(&self, id: TeamId) -> impl Future<Output = Result<Team>> + Send;
}

/// reqwest-backed OpenDota client.
#[derive(Debug, Clone)]
pub struct OpenDotaClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenDotaClient {
    /// Client against the public API, picking up `OPENDOTA_API_KEY` if set.
    pub fn new() -> Result<Self> {
        Ok(Self::with_base_url(OPENDOTA_BASE_URL)?.with_api_key(maybe_api_key()))
    }

    /// Anonymous client against an arbitrary base URL (mirrors, local mocks).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        })
    }

    /// Send `api_key` as a query parameter on every request.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let mut builder = self.client.get(&url);
        if let Some(key) = &self.api_key {
            builder = builder.query(&[("api_key", key)]);
        }

        let raw = builder
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(serde_json::from_value(raw)?)
    }
}

impl OpenDotaApi for OpenDotaClient {
    async fn pro_players(&self) -> Result<Vec<PlayerInput>> {
        self.get_json("/proPlayers").await
    }

    async fn team(&self, id: TeamId) -> Result<Team> {
        self.get_json(&format!("/teams/{}", id)).await
    }
}

//! Fetches registry files for a chain from the upstream repository
//!
//! Failures are returned as-is; callers decide whether to give up.

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::loader::parse_batch;
use crate::models::{Account, Record};

pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/coinhall/yacar/main";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub struct RemoteRegistry {
    client: Client,
    base_url: String,
}

impl RemoteRegistry {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// URL of the file holding `R` records for `chain`
    pub fn url_for<R: Record>(&self, chain: &str) -> String {
        format!("{}/{}/{}", self.base_url, chain, R::KIND.file_name())
    }

    /// GET and decode one kind's batch for a chain
    pub async fn fetch_batch<R: Record + DeserializeOwned>(
        &self,
        chain: &str,
    ) -> Result<Vec<R>, FetchError> {
        let url = self.url_for::<R>(chain);
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let batch: Vec<R> =
            parse_batch(&body).map_err(|source| FetchError::Decode { url: url.clone(), source })?;

        debug!("Fetched {} {} records from {}", batch.len(), R::KIND, url);
        Ok(batch)
    }

    pub async fn get_accounts(&self, chain: &str) -> Result<Vec<Account>, FetchError> {
        self.fetch_batch(chain).await
    }
}

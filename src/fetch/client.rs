// src/fetch/client.rs

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::types::Substance;
use super::urls::build_url;
use crate::config::SearchConfig;

/// Why a lookup produced no payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, timeout or any other failure before a response arrived.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request returned status code {status}: {url}")]
    Status { url: String, status: StatusCode },

    #[error("reading JSON body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }
}

/// Anything that can resolve a CAS RN to zero or more substance records.
#[allow(async_fn_in_trait)]
pub trait SubstanceLookup {
    async fn lookup(&self, casrn: &str) -> Result<Vec<Substance>, FetchError>;
}

/// HTTP client for the SRS substance endpoint.
#[derive(Clone, Debug)]
pub struct SrsClient {
    http: Client,
    base_url: String,
}

impl SrsClient {
    /// Build a client with the configured endpoint and per-request timeout.
    pub fn new(cfg: &SearchConfig) -> Result<Self> {
        Url::parse(&cfg.base_url)
            .with_context(|| format!("parsing base URL {}", cfg.base_url))?;
        let http = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            base_url: cfg.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode the JSON array body.
    ///
    /// Every failure is logged as a warning and handed back as a
    /// [`FetchError`]; nothing here panics or retries.
    pub async fn get_substances(&self, url: &str) -> Result<Vec<Substance>, FetchError> {
        debug!(%url, "GET");
        let resp = match self.http.get(url).send().await {
            Ok(resp) => resp,
            Err(source) => {
                warn!(%url, error = %source, "request failed");
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    source,
                });
            }
        };

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "request returned status code {}", status.as_u16());
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        resp.json::<Vec<Substance>>().await.map_err(|source| {
            warn!(%url, error = %source, "response body is not a substance list");
            FetchError::Decode {
                url: url.to_string(),
                source,
            }
        })
    }
}

impl SubstanceLookup for SrsClient {
    async fn lookup(&self, casrn: &str) -> Result<Vec<Substance>, FetchError> {
        let url = build_url(&self.base_url, casrn);
        self.get_substances(&url).await
    }
}

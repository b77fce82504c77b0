//! List Downloaders
//!
//! Fetches the raw list files over HTTP. Each file is retried independently
//! with a doubling backoff and a jittered delay so a transient upstream
//! hiccup does not abort the whole refresh cycle.
//!
//! The [`ListSource`] trait is the seam the refresh pipeline is generic over;
//! tests substitute an in-memory source for the real HTTP one.

use super::types::ListPayload;
use rand::Rng;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const INITIAL_BACKOFF_MS: u64 = 150;
const MAX_BACKOFF_MS: u64 = 1200;

/// A download that did not produce a usable payload after all retries.
#[derive(Debug, Error)]
#[error("failed to download {list}: {reason}")]
pub struct FetchError {
    pub list: &'static str,
    pub reason: String,
}

/// Where one refresh cycle's list files come from.
pub trait ListSource: Send + Sync + 'static {
    fn fetch(&self) -> impl std::future::Future<Output = Result<ListPayload, FetchError>> + Send;
}

/// Per-source download settings, resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub sdn_url: String,
    pub alt_url: String,
    pub add_url: String,
    pub dpl_url: String,
    pub timeout: Duration,
    pub retries: u32,
}

/// HTTP source backed by a shared [`reqwest::Client`].
pub struct HttpListSource {
    client: reqwest::Client,
    config: DownloadConfig,
}

impl HttpListSource {
    pub fn new(config: DownloadConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    async fn get_with_retry(&self, list: &'static str, url: &str) -> Result<String, FetchError> {
        let attempts = self.config.retries.max(1);
        let mut delay_ms = INITIAL_BACKOFF_MS;
        let mut last_err = String::new();

        for attempt in 1..=attempts {
            match self.get_once(url).await {
                Ok(body) => {
                    debug!(list, attempt, bytes = body.len(), "downloaded list file");
                    return Ok(body);
                }
                Err(reason) => {
                    warn!(list, attempt, %reason, "list download attempt failed");
                    last_err = reason;
                }
            }
            if attempt < attempts {
                let jitter = rand::thread_rng().gen_range(0..=delay_ms / 2);
                tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                delay_ms = (delay_ms * 2).min(MAX_BACKOFF_MS);
            }
        }

        Err(FetchError {
            list,
            reason: last_err,
        })
    }

    async fn get_once(&self, url: &str) -> Result<String, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("unexpected status {}", response.status()));
        }
        response.text().await.map_err(|e| e.to_string())
    }
}

impl ListSource for HttpListSource {
    async fn fetch(&self) -> Result<ListPayload, FetchError> {
        let sdn_csv = self.get_with_retry("sdn.csv", &self.config.sdn_url).await?;
        let alt_csv = self.get_with_retry("alt.csv", &self.config.alt_url).await?;
        let add_csv = self.get_with_retry("add.csv", &self.config.add_url).await?;
        let dpl_tsv = self.get_with_retry("dpl.txt", &self.config.dpl_url).await?;
        Ok(ListPayload {
            sdn_csv,
            alt_csv,
            add_csv,
            dpl_tsv,
        })
    }
}

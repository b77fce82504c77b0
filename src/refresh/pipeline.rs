//! Refresh Cycle
//!
//! One cycle moves through Fetching, Parsing, Building, and Swapping, then
//! returns to Idle. Cycles are serialized: a manual refresh that arrives
//! while the periodic one is running waits its turn rather than racing it.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};

use crate::data::downloader::{FetchError, ListSource};
use crate::data::parser::{self, ParseError};
use crate::search::searcher::{Searcher, SharedSearcher};
use super::stats::{DownloadHistory, DownloadStats};

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Fetching,
    Parsing,
    Building,
    Swapping,
}

pub struct RefreshPipeline<S: ListSource> {
    source: S,
    searcher: SharedSearcher,
    pub history: DownloadHistory,
    cycle: Mutex<()>,
    stage: RwLock<Stage>,
}

impl<S: ListSource> RefreshPipeline<S> {
    pub fn new(source: S, searcher: SharedSearcher) -> Self {
        Self {
            source,
            searcher,
            history: DownloadHistory::default(),
            cycle: Mutex::new(()),
            stage: RwLock::new(Stage::Idle),
        }
    }

    pub async fn stage(&self) -> Stage {
        *self.stage.read().await
    }

    /// Runs one full cycle. On any error the live snapshot is left as it
    /// was and no history entry is recorded.
    pub async fn refresh(&self) -> Result<DownloadStats, RefreshError> {
        let _cycle = self.cycle.lock().await;
        let result = self.run_cycle().await;
        *self.stage.write().await = Stage::Idle;
        result
    }

    async fn run_cycle(&self) -> Result<DownloadStats, RefreshError> {
        self.set_stage(Stage::Fetching).await;
        let payload = self.source.fetch().await?;

        self.set_stage(Stage::Parsing).await;
        let records = parser::parse_lists(&payload)?;

        self.set_stage(Stage::Building).await;
        let searcher = Searcher::build(&records);
        let stats = DownloadStats {
            sdns: records.sdns.len(),
            alt_names: records.alt_names.len(),
            addresses: records.addresses.len(),
            denied_persons: records.denied_persons.len(),
            timestamp: Utc::now(),
        };

        self.set_stage(Stage::Swapping).await;
        self.searcher.replace(searcher).await;
        self.history.record(stats.clone()).await;

        info!(
            sdns = stats.sdns,
            alt_names = stats.alt_names,
            addresses = stats.addresses,
            denied_persons = stats.denied_persons,
            "refreshed watch lists"
        );
        Ok(stats)
    }

    async fn set_stage(&self, stage: Stage) {
        *self.stage.write().await = stage;
    }
}

/// Drives the pipeline on a fixed period. The first tick is consumed up
/// front since the caller runs the initial refresh itself.
pub fn start_periodic<S: ListSource>(
    pipeline: Arc<RefreshPipeline<S>>,
    period: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(err) = pipeline.refresh().await {
                error!(%err, "periodic list refresh failed");
            }
        }
    })
}

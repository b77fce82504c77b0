//! Download Statistics

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

const MAX_ENTRIES: usize = 256;

/// Record counts from one completed refresh cycle.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadStats {
    #[serde(rename = "SDNs")]
    pub sdns: usize,
    #[serde(rename = "altNames")]
    pub alt_names: usize,
    pub addresses: usize,
    #[serde(rename = "deniedPersons")]
    pub denied_persons: usize,
    pub timestamp: DateTime<Utc>,
}

/// Most-recent-first history of completed cycles, bounded at
/// [`MAX_ENTRIES`].
#[derive(Default)]
pub struct DownloadHistory {
    entries: RwLock<VecDeque<DownloadStats>>,
}

impl DownloadHistory {
    pub async fn record(&self, stats: DownloadStats) {
        let mut entries = self.entries.write().await;
        entries.push_front(stats);
        entries.truncate(MAX_ENTRIES);
    }

    pub async fn latest(&self, limit: usize) -> Vec<DownloadStats> {
        let entries = self.entries.read().await;
        entries.iter().take(limit).cloned().collect()
    }
}

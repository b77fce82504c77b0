//! List Refresh Pipeline
//!
//! ## Layout
//!
//! - `pipeline` — the fetch → parse → build → swap cycle and its periodic
//!   driver
//! - `stats` — per-cycle record counts kept for `GET /downloads`
//! - `handlers` — the manual-refresh and download-history HTTP surface
//!
//! A failed cycle leaves the live searcher untouched; only a cycle that
//! completes every stage swaps the snapshot and records its stats.

pub mod handlers;
pub mod pipeline;
pub mod stats;

#[cfg(test)]
mod tests;

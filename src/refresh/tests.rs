use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use axum::Extension;
use axum::extract::Query;
use axum::http::StatusCode;
use chrono::Utc;

use crate::data::downloader::{FetchError, ListSource};
use crate::data::types::{ListPayload, ListRecords, Sdn};
use crate::search::searcher::{Searcher, SharedSearcher};
use super::handlers::{DownloadsParams, downloads, manual_refresh};
use super::pipeline::{RefreshPipeline, Stage};
use super::stats::{DownloadHistory, DownloadStats};

#[derive(Clone)]
struct StaticSource(ListPayload);

impl ListSource for StaticSource {
    async fn fetch(&self) -> Result<ListPayload, FetchError> {
        Ok(self.0.clone())
    }
}

/// Holds the fetch open long enough for a second trigger to arrive, and
/// flags any overlapping fetch.
struct SlowSource {
    payload: ListPayload,
    in_flight: AtomicUsize,
    overlapped: Arc<AtomicBool>,
}

impl ListSource for SlowSource {
    async fn fetch(&self) -> Result<ListPayload, FetchError> {
        if self.in_flight.fetch_add(1, Ordering::SeqCst) > 0 {
            self.overlapped.store(true, Ordering::SeqCst);
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

struct FailingSource;

impl ListSource for FailingSource {
    async fn fetch(&self) -> Result<ListPayload, FetchError> {
        Err(FetchError {
            list: "sdn.csv",
            reason: "connection refused".to_string(),
        })
    }
}

fn bush_payload() -> ListPayload {
    ListPayload {
        sdn_csv: "17104,\"BUSH, George W\",\"individual\",-0-,-0-,-0-,-0-,-0-,-0-,-0-,-0-,-0-\n"
            .to_string(),
        alt_csv: "17104,1,\"aka\",\"George Walker BUSH\",-0-\n".to_string(),
        add_csv: "17104,1,\"1600 Pennsylvania Ave\",\"Washington DC\",\"United States\",-0-\n"
            .to_string(),
        dpl_tsv: concat!(
            "Name\tStreet_Address\tCity\tState\tCountry\tPostal_Code\tEffective_Date\tExpiration_Date\tStandard_Order\tLast_Update\tAction\tFR_Citation\n",
            "\"RYAN KARL OBRIEN\"\t\"2442 ROBERT DANIEL COURT\"\t\"SOUTH LAKE TAHOE\"\t\"CA\"\t\"US\"\t\"96150\"\t\"06/15/2016\"\t\"06/15/2026\"\t\"Y\"\t\"06/15/2016\"\t\"FR NOTICE ADDED\"\t\"81 F.R. 40658 6/22/2016\"\n",
        )
        .to_string(),
    }
}

fn seeded_searcher() -> SharedSearcher {
    SharedSearcher::new(Searcher::build(&ListRecords {
        sdns: vec![Sdn {
            entity_id: "1".to_string(),
            sdn_name: "OLD RECORD".to_string(),
            sdn_type: String::new(),
            program: String::new(),
            title: String::new(),
            remarks: String::new(),
        }],
        ..ListRecords::default()
    }))
}

#[tokio::test]
async fn refresh_swaps_in_the_new_snapshot() {
    let shared = SharedSearcher::new(Searcher::default());
    let pipeline = RefreshPipeline::new(StaticSource(bush_payload()), shared.clone());

    let stats = pipeline.refresh().await.unwrap();
    assert_eq!(stats.sdns, 1);
    assert_eq!(stats.alt_names, 1);
    assert_eq!(stats.addresses, 1);
    assert_eq!(stats.denied_persons, 1);
    assert_eq!(pipeline.stage().await, Stage::Idle);

    let hits = shared.current().await.top_sdns(10, "george bush");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, 1.0);

    assert_eq!(pipeline.history.latest(10).await.len(), 1);
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_snapshot() {
    let shared = seeded_searcher();
    let pipeline = RefreshPipeline::new(FailingSource, shared.clone());

    let err = pipeline.refresh().await.unwrap_err();
    assert!(err.to_string().contains("sdn.csv"));
    assert_eq!(pipeline.stage().await, Stage::Idle);

    let hits = shared.current().await.top_sdns(10, "old record");
    assert_eq!(hits.len(), 1);
    assert!(pipeline.history.latest(10).await.is_empty());
}

#[tokio::test]
async fn overlapping_refreshes_run_one_at_a_time() {
    let overlapped = Arc::new(AtomicBool::new(false));
    let pipeline = Arc::new(RefreshPipeline::new(
        SlowSource {
            payload: bush_payload(),
            in_flight: AtomicUsize::new(0),
            overlapped: overlapped.clone(),
        },
        SharedSearcher::new(Searcher::default()),
    ));

    let first = tokio::spawn({
        let pipeline = pipeline.clone();
        async move { pipeline.refresh().await }
    });
    let second = tokio::spawn({
        let pipeline = pipeline.clone();
        async move { pipeline.refresh().await }
    });

    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    assert!(!overlapped.load(Ordering::SeqCst));
    assert_eq!(pipeline.history.latest(10).await.len(), 2);
}

#[tokio::test]
async fn history_returns_newest_first() {
    let history = DownloadHistory::default();
    for n in 1..=3 {
        history
            .record(DownloadStats {
                sdns: n,
                alt_names: 0,
                addresses: 0,
                denied_persons: 0,
                timestamp: Utc::now(),
            })
            .await;
    }

    let latest = history.latest(2).await;
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].sdns, 3);
    assert_eq!(latest[1].sdns, 2);
}

#[tokio::test]
async fn history_is_bounded() {
    let history = DownloadHistory::default();
    for n in 1..=300 {
        history
            .record(DownloadStats {
                sdns: n,
                alt_names: 0,
                addresses: 0,
                denied_persons: 0,
                timestamp: Utc::now(),
            })
            .await;
    }

    let latest = history.latest(usize::MAX).await;
    assert_eq!(latest.len(), 256);
    assert_eq!(latest[0].sdns, 300);
    assert_eq!(latest[255].sdns, 45);
}

#[tokio::test]
async fn manual_refresh_reports_stats() {
    let pipeline = Arc::new(RefreshPipeline::new(
        StaticSource(bush_payload()),
        SharedSearcher::new(Searcher::default()),
    ));

    let response = manual_refresh(Extension(pipeline.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["SDNs"], 1);
    assert_eq!(body["deniedPersons"], 1);

    let response = downloads(Extension(pipeline), Query(DownloadsParams { limit: None })).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn manual_refresh_maps_failures_to_bad_gateway() {
    let pipeline = Arc::new(RefreshPipeline::new(
        FailingSource,
        SharedSearcher::new(Searcher::default()),
    ));

    let response = manual_refresh(Extension(pipeline)).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

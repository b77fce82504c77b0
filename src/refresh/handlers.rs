//! Refresh HTTP Handlers

use std::sync::Arc;

use axum::Extension;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::error;

use crate::data::downloader::ListSource;
use crate::search::types::ErrorResponse;
use super::pipeline::RefreshPipeline;

const DEFAULT_HISTORY_LIMIT: usize = 12;

/// `GET /data/refresh` — runs a refresh cycle synchronously and reports its
/// stats. An upstream or parse failure maps to 502 and keeps the previous
/// snapshot serving.
pub async fn manual_refresh<S: ListSource>(
    Extension(pipeline): Extension<Arc<RefreshPipeline<S>>>,
) -> Response {
    match pipeline.refresh().await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(err) => {
            error!(%err, "manual refresh failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DownloadsParams {
    pub limit: Option<usize>,
}

/// `GET /downloads` — most recent refresh cycles, newest first.
pub async fn downloads<S: ListSource>(
    Extension(pipeline): Extension<Arc<RefreshPipeline<S>>>,
    Query(params): Query<DownloadsParams>,
) -> Response {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let entries = pipeline.history.latest(limit).await;
    (StatusCode::OK, Json(entries)).into_response()
}

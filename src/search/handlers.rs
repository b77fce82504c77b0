//! Search HTTP Handlers

use axum::Extension;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use super::searcher::SharedSearcher;
use super::types::{AddressQuery, ErrorResponse, SearchParams, SearchResponse};

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 100;

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// `GET /search` — fuzzy search over the current snapshot. Requires at least
/// one text parameter; `q` fans out across all four lists.
pub async fn search(
    Extension(searcher): Extension<SharedSearcher>,
    Query(params): Query<SearchParams>,
) -> Response {
    let limit = match params.limit {
        None => DEFAULT_LIMIT,
        Some(0) => return bad_request("limit must be greater than zero"),
        Some(n) => n.min(MAX_LIMIT),
    };

    let address_query = AddressQuery {
        address: supplied(&params.address).map(str::to_string),
        city: supplied(&params.city).map(str::to_string),
        state: supplied(&params.state).map(str::to_string),
        providence: supplied(&params.providence).map(str::to_string),
        country: supplied(&params.country).map(str::to_string),
    };

    let searcher = searcher.current().await;
    let response = if let Some(q) = supplied(&params.q) {
        debug!(q, limit, "searching all lists");
        SearchResponse {
            sdns: searcher.top_sdns(limit, q),
            alt_names: searcher.top_alt_names(limit, q),
            addresses: searcher.top_addresses(
                limit,
                &AddressQuery {
                    address: Some(q.to_string()),
                    ..AddressQuery::default()
                },
            ),
            denied_persons: searcher.top_denied_persons(limit, q),
        }
    } else if let Some(id) = supplied(&params.id) {
        debug!(id, limit, "searching SDN remarks identifiers");
        SearchResponse {
            sdns: searcher.sdns_by_remarks_id(limit, id),
            ..SearchResponse::default()
        }
    } else if let Some(name) = supplied(&params.name) {
        if address_query.is_empty() {
            debug!(name, limit, "searching names");
            SearchResponse {
                sdns: searcher.top_sdns(limit, name),
                denied_persons: searcher.top_denied_persons(limit, name),
                ..SearchResponse::default()
            }
        } else {
            debug!(name, limit, "searching names joined with addresses");
            let (sdns, addresses) =
                searcher.top_sdns_and_addresses(limit, name, &address_query);
            SearchResponse {
                sdns,
                addresses,
                ..SearchResponse::default()
            }
        }
    } else if let Some(alt_name) = supplied(&params.alt_name) {
        debug!(alt_name, limit, "searching alternate identities");
        SearchResponse {
            alt_names: searcher.top_alt_names(limit, alt_name),
            ..SearchResponse::default()
        }
    } else if !address_query.is_empty() {
        debug!(limit, "searching addresses");
        SearchResponse {
            addresses: searcher.top_addresses(limit, &address_query),
            ..SearchResponse::default()
        }
    } else {
        return bad_request(
            "search requires one of q, name, altName, id, or an address field",
        );
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// `GET /ping` — liveness probe.
pub async fn ping() -> Response {
    (StatusCode::OK, "PONG").into_response()
}

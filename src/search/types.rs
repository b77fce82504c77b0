//! Search Request and Response Types

use crate::data::types::{Address, AlternateIdentity, DeniedPerson, Sdn};
use serde::{Deserialize, Serialize};

/// Query-string parameters accepted by `GET /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "altName")]
    pub alt_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub providence: Option<String>,
    pub country: Option<String>,
    pub id: Option<String>,
    pub limit: Option<usize>,
}

/// Address-side query fields. `city`, `state`, and `providence` each compare
/// against the combined city/state/postal block of the indexed record.
#[derive(Debug, Default)]
pub struct AddressQuery {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub providence: Option<String>,
    pub country: Option<String>,
}

impl AddressQuery {
    pub fn is_empty(&self) -> bool {
        [
            &self.address,
            &self.city,
            &self.state,
            &self.providence,
            &self.country,
        ]
        .iter()
        .all(|f| f.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredSdn {
    #[serde(flatten)]
    pub sdn: Sdn,
    #[serde(rename = "match")]
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredAlt {
    #[serde(flatten)]
    pub alt: AlternateIdentity,
    #[serde(rename = "match")]
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredAddress {
    #[serde(flatten)]
    pub address: Address,
    #[serde(rename = "match")]
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredDeniedPerson {
    #[serde(flatten)]
    pub person: DeniedPerson,
    #[serde(rename = "match")]
    pub score: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct SearchResponse {
    #[serde(rename = "SDNs")]
    pub sdns: Vec<ScoredSdn>,
    #[serde(rename = "altNames")]
    pub alt_names: Vec<ScoredAlt>,
    pub addresses: Vec<ScoredAddress>,
    #[serde(rename = "deniedPersons")]
    pub denied_persons: Vec<ScoredDeniedPerson>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

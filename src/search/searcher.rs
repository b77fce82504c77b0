//! Searcher Snapshots
//!
//! A [`Searcher`] is an immutable index over one download of all four lists.
//! Handlers clone an `Arc` to the current snapshot and keep using it for the
//! whole request even if a refresh swaps in a newer one mid-flight.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::data::types::ListRecords;
use super::normalizer::{normalize, normalize_address_part, normalize_tokens};
use super::similarity::{jaro, round_score, token_score};
use super::store::{
    self, IndexedAddress, IndexedAlt, IndexedDeniedPerson, IndexedSdn,
};
use super::types::{
    AddressQuery, ScoredAddress, ScoredAlt, ScoredDeniedPerson, ScoredSdn,
};

#[derive(Default)]
pub struct Searcher {
    sdns: Vec<IndexedSdn>,
    alt_names: Vec<IndexedAlt>,
    addresses: Vec<IndexedAddress>,
    denied_persons: Vec<IndexedDeniedPerson>,
}

impl Searcher {
    pub fn build(records: &ListRecords) -> Self {
        Self {
            sdns: store::prepare_sdns(&records.sdns),
            alt_names: store::prepare_alt_names(&records.alt_names),
            addresses: store::prepare_addresses(&records.addresses),
            denied_persons: store::prepare_denied_persons(&records.denied_persons),
        }
    }

    pub fn top_sdns(&self, limit: usize, name: &str) -> Vec<ScoredSdn> {
        let query = normalize_tokens(name);
        let scored = self
            .sdns
            .iter()
            .map(|s| (token_score(&query, &s.name_tokens), s))
            .collect();
        store::top_n(limit, scored)
            .into_iter()
            .map(|(score, s)| ScoredSdn {
                sdn: s.sdn.clone(),
                score: round_score(score),
            })
            .collect()
    }

    pub fn top_alt_names(&self, limit: usize, name: &str) -> Vec<ScoredAlt> {
        let query = normalize_tokens(name);
        let scored = self
            .alt_names
            .iter()
            .map(|a| (token_score(&query, &a.name_tokens), a))
            .collect();
        store::top_n(limit, scored)
            .into_iter()
            .map(|(score, a)| ScoredAlt {
                alt: a.alt.clone(),
                score: round_score(score),
            })
            .collect()
    }

    pub fn top_denied_persons(&self, limit: usize, name: &str) -> Vec<ScoredDeniedPerson> {
        let query = normalize_tokens(name);
        let scored = self
            .denied_persons
            .iter()
            .map(|p| (token_score(&query, &p.name_tokens), p))
            .collect();
        store::top_n(limit, scored)
            .into_iter()
            .map(|(score, p)| ScoredDeniedPerson {
                person: p.person.clone(),
                score: round_score(score),
            })
            .collect()
    }

    /// Scores each indexed address against the supplied fields only: absent
    /// query fields neither help nor hurt a record.
    pub fn top_addresses(&self, limit: usize, query: &AddressQuery) -> Vec<ScoredAddress> {
        let line = query.address.as_deref().map(normalize_address_part);
        let city_parts: Vec<String> = [&query.city, &query.state, &query.providence]
            .iter()
            .filter_map(|f| f.as_deref())
            .filter(|s| !s.trim().is_empty())
            .map(normalize_address_part)
            .collect();
        let country = query.country.as_deref().map(normalize_address_part);

        let scored = self
            .addresses
            .iter()
            .map(|a| {
                let mut total = 0.0;
                let mut fields = 0usize;
                if let Some(line) = &line {
                    total += jaro(line, &a.line);
                    fields += 1;
                }
                for part in &city_parts {
                    total += jaro(part, &a.city_state);
                    fields += 1;
                }
                if let Some(country) = &country {
                    total += jaro(country, &a.country);
                    fields += 1;
                }
                let score = if fields == 0 { 0.0 } else { total / fields as f64 };
                (score, a)
            })
            .collect();
        store::top_n(limit, scored)
            .into_iter()
            .map(|(score, a)| ScoredAddress {
                address: a.address.clone(),
                score: round_score(score),
            })
            .collect()
    }

    /// Exact lookup of an identifier appearing in SDN remarks (passport and
    /// national ID numbers). Matches score 1.0 and keep list order.
    pub fn sdns_by_remarks_id(&self, limit: usize, id: &str) -> Vec<ScoredSdn> {
        let id = normalize(id);
        if id.is_empty() {
            return Vec::new();
        }
        self.sdns
            .iter()
            .filter(|s| s.remark_tokens.iter().any(|t| *t == id))
            .take(limit)
            .map(|s| ScoredSdn {
                sdn: s.sdn.clone(),
                score: 1.0,
            })
            .collect()
    }

    /// Combined name-and-address search: both lists are ranked and limited
    /// independently, then narrowed to entities present in both.
    pub fn top_sdns_and_addresses(
        &self,
        limit: usize,
        name: &str,
        query: &AddressQuery,
    ) -> (Vec<ScoredSdn>, Vec<ScoredAddress>) {
        let mut sdns = self.top_sdns(limit, name);
        let mut addresses = self.top_addresses(limit, query);

        let sdn_ids: HashSet<String> = sdns.iter().map(|s| s.sdn.entity_id.clone()).collect();
        let address_ids: HashSet<String> = addresses
            .iter()
            .map(|a| a.address.entity_id.clone())
            .collect();

        sdns.retain(|s| address_ids.contains(&s.sdn.entity_id));
        addresses.retain(|a| sdn_ids.contains(&a.address.entity_id));
        (sdns, addresses)
    }
}

/// Handle to the live snapshot. Reads clone the inner `Arc`; a refresh
/// replaces it with a single pointer write.
#[derive(Clone)]
pub struct SharedSearcher {
    inner: Arc<RwLock<Arc<Searcher>>>,
}

impl SharedSearcher {
    pub fn new(searcher: Searcher) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(searcher))),
        }
    }

    pub async fn current(&self) -> Arc<Searcher> {
        self.inner.read().await.clone()
    }

    pub async fn replace(&self, next: Searcher) {
        *self.inner.write().await = Arc::new(next);
    }
}

//! Precomputed Indexes
//!
//! Raw list records are normalized once, at build time, into the token and
//! line forms the scorers compare against. Individual SDN names are reordered
//! into natural order before tokenization; alternate identities are indexed
//! as published.

use crate::data::types::{Address, AlternateIdentity, DeniedPerson, Sdn};
use super::normalizer::{
    normalize_address_part, normalize_tokens, reorder_individual_name,
};

pub struct IndexedSdn {
    pub sdn: Sdn,
    pub name_tokens: Vec<String>,
    pub remark_tokens: Vec<String>,
}

pub struct IndexedAlt {
    pub alt: AlternateIdentity,
    pub name_tokens: Vec<String>,
}

pub struct IndexedAddress {
    pub address: Address,
    pub line: String,
    pub city_state: String,
    pub country: String,
}

pub struct IndexedDeniedPerson {
    pub person: DeniedPerson,
    pub name_tokens: Vec<String>,
}

pub fn prepare_sdns(records: &[Sdn]) -> Vec<IndexedSdn> {
    records
        .iter()
        .map(|sdn| {
            let name = if sdn.sdn_type.eq_ignore_ascii_case("individual") {
                reorder_individual_name(&sdn.sdn_name)
            } else {
                sdn.sdn_name.clone()
            };
            IndexedSdn {
                name_tokens: normalize_tokens(&name),
                remark_tokens: normalize_tokens(&sdn.remarks),
                sdn: sdn.clone(),
            }
        })
        .collect()
}

pub fn prepare_alt_names(records: &[AlternateIdentity]) -> Vec<IndexedAlt> {
    records
        .iter()
        .map(|alt| IndexedAlt {
            name_tokens: normalize_tokens(&alt.alt_name),
            alt: alt.clone(),
        })
        .collect()
}

pub fn prepare_addresses(records: &[Address]) -> Vec<IndexedAddress> {
    records
        .iter()
        .map(|address| IndexedAddress {
            line: normalize_address_part(&address.address),
            city_state: normalize_address_part(&address.city_state_province_postal_code),
            country: normalize_address_part(&address.country),
            address: address.clone(),
        })
        .collect()
}

pub fn prepare_denied_persons(records: &[DeniedPerson]) -> Vec<IndexedDeniedPerson> {
    records
        .iter()
        .map(|person| IndexedDeniedPerson {
            name_tokens: normalize_tokens(&person.name),
            person: person.clone(),
        })
        .collect()
}

/// Keeps the `limit` highest-scoring items. The sort is stable, so equal
/// scores stay in list order.
pub fn top_n<T>(limit: usize, mut scored: Vec<(f64, T)>) -> Vec<(f64, T)> {
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(limit);
    scored
}

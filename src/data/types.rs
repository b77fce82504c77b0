//! Raw Watchlist Record Types
//!
//! Typed representations of the rows in the upstream list files. Field names on
//! the wire match the upstream API so existing clients can consume responses
//! unchanged. Records are immutable once loaded; a refresh cycle always builds
//! fresh vectors rather than mutating these in place.

use serde::{Deserialize, Serialize};

/// Specially Designated National — the primary sanctioned-entity record.
///
/// `entity_id` groups an SDN with its alternate identities and addresses;
/// the three OFAC files share this key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sdn {
    #[serde(rename = "entityID")]
    pub entity_id: String,
    pub sdn_name: String,
    /// Typically "individual" or a company/vessel marker. Individual names
    /// arrive as "LAST, First" and are reordered during precompute.
    pub sdn_type: String,
    pub program: String,
    pub title: String,
    pub remarks: String,
}

/// Known alias linked to an SDN via `entity_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateIdentity {
    #[serde(rename = "entityID")]
    pub entity_id: String,
    #[serde(rename = "alternateID")]
    pub alt_id: String,
    pub alt_type: String,
    pub alt_name: String,
    pub alt_remarks: String,
}

/// Physical address linked to an SDN via `entity_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "entityID")]
    pub entity_id: String,
    #[serde(rename = "addressID")]
    pub address_id: String,
    pub address: String,
    pub city_state_province_postal_code: String,
    pub country: String,
    pub add_remarks: String,
}

/// Entry from the BIS denied-persons list.
///
/// The upstream table carries no entity identifier, so denied persons do not
/// participate in the EntityID join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeniedPerson {
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub effective_date: String,
    pub expiration_date: String,
    pub standard_order: String,
    pub last_update: String,
    pub action: String,
    pub fr_citation: String,
}

/// The raw text of the four list files, as fetched from the source.
#[derive(Debug, Clone, Default)]
pub struct ListPayload {
    pub sdn_csv: String,
    pub alt_csv: String,
    pub add_csv: String,
    pub dpl_tsv: String,
}

/// The parsed contents of one refresh cycle, ready for index building.
#[derive(Debug, Clone, Default)]
pub struct ListRecords {
    pub sdns: Vec<Sdn>,
    pub alt_names: Vec<AlternateIdentity>,
    pub addresses: Vec<Address>,
    pub denied_persons: Vec<DeniedPerson>,
}

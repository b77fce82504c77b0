//! Upstream List File Parsers
//!
//! Decodes the OFAC CSV files (comma separated, unquoted headers absent, the
//! literal `-0-` marking an empty field) and the BIS denied-persons table
//! (tab separated, quoted, with a header row) into raw records.
//!
//! Parsers are deliberately tolerant of ragged rows — upstream files have
//! historically gained trailing columns — but a payload the CSV reader cannot
//! decode at all aborts the refresh cycle with a [`ParseError`].

use super::types::{Address, AlternateIdentity, DeniedPerson, ListPayload, ListRecords, Sdn};
use thiserror::Error;

/// Malformed source data. Not retryable within the same refresh cycle.
#[derive(Debug, Error)]
#[error("failed to parse {list}: {reason}")]
pub struct ParseError {
    pub list: &'static str,
    pub reason: String,
}

/// Parses all four list payloads of one refresh cycle.
pub fn parse_lists(payload: &ListPayload) -> Result<ListRecords, ParseError> {
    Ok(ListRecords {
        sdns: parse_sdns(&payload.sdn_csv)?,
        alt_names: parse_alt_names(&payload.alt_csv)?,
        addresses: parse_addresses(&payload.add_csv)?,
        denied_persons: parse_denied_persons(&payload.dpl_tsv)?,
    })
}

pub fn parse_sdns(text: &str) -> Result<Vec<Sdn>, ParseError> {
    let mut out = Vec::new();
    for row in ofac_reader(text).records() {
        let row = row.map_err(|e| parse_error("sdn.csv", e))?;
        out.push(Sdn {
            entity_id: clean(row.get(0)),
            sdn_name: clean(row.get(1)),
            sdn_type: clean(row.get(2)),
            program: clean(row.get(3)),
            title: clean(row.get(4)),
            remarks: clean(row.get(11)),
        });
    }
    Ok(out)
}

pub fn parse_alt_names(text: &str) -> Result<Vec<AlternateIdentity>, ParseError> {
    let mut out = Vec::new();
    for row in ofac_reader(text).records() {
        let row = row.map_err(|e| parse_error("alt.csv", e))?;
        out.push(AlternateIdentity {
            entity_id: clean(row.get(0)),
            alt_id: clean(row.get(1)),
            alt_type: clean(row.get(2)),
            alt_name: clean(row.get(3)),
            alt_remarks: clean(row.get(4)),
        });
    }
    Ok(out)
}

pub fn parse_addresses(text: &str) -> Result<Vec<Address>, ParseError> {
    let mut out = Vec::new();
    for row in ofac_reader(text).records() {
        let row = row.map_err(|e| parse_error("add.csv", e))?;
        out.push(Address {
            entity_id: clean(row.get(0)),
            address_id: clean(row.get(1)),
            address: clean(row.get(2)),
            city_state_province_postal_code: clean(row.get(3)),
            country: clean(row.get(4)),
            add_remarks: clean(row.get(5)),
        });
    }
    Ok(out)
}

pub fn parse_denied_persons(text: &str) -> Result<Vec<DeniedPerson>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut out = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| parse_error("dpl.txt", e))?;
        out.push(DeniedPerson {
            name: clean(row.get(0)),
            street_address: clean(row.get(1)),
            city: clean(row.get(2)),
            state: clean(row.get(3)),
            country: clean(row.get(4)),
            postal_code: clean(row.get(5)),
            effective_date: clean(row.get(6)),
            expiration_date: clean(row.get(7)),
            standard_order: clean(row.get(8)),
            last_update: clean(row.get(9)),
            action: clean(row.get(10)),
            fr_citation: clean(row.get(11)),
        });
    }
    Ok(out)
}

fn ofac_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
}

fn parse_error(list: &'static str, err: csv::Error) -> ParseError {
    ParseError {
        list,
        reason: err.to_string(),
    }
}

/// Trims a field and scrubs the upstream `-0-` empty marker.
fn clean(field: Option<&str>) -> String {
    let value = field.unwrap_or("").trim();
    if value == "-0-" {
        String::new()
    } else {
        value.to_string()
    }
}

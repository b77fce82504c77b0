//! Data Intake Module
//!
//! Handles the acquisition and decoding of the upstream watchlist files.
//!
//! ## Workflow
//! 1. **Download**: Fetches the raw list files (OFAC SDN/alt/address CSVs and the
//!    BIS denied-persons table) over HTTP with bounded retries.
//! 2. **Parse**: Decodes each payload into typed raw records, scrubbing the
//!    upstream `-0-` empty-field marker.
//! 3. **Hand-off**: The refresh pipeline turns the parsed records into a new
//!    search index; nothing in this module touches the live index.

pub mod downloader;
pub mod parser;
pub mod types;

//! Watchlist Search Service Library
//!
//! This library crate defines the core modules of the sanctions screening service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`data`**: The data intake layer. Defines the raw watchlist record types
//!   (SDNs, alternate identities, addresses, denied persons), the parsers for the
//!   upstream flat files, and the HTTP download client with retry/backoff.
//! - **`search`**: The core information retrieval logic. Contains the text
//!   normalizer, the fuzzy similarity scoring algorithm, the precomputed record
//!   stores, and the `Searcher` snapshot that answers queries.
//! - **`refresh`**: The index refresh pipeline. Periodically re-downloads the
//!   source lists, builds a brand-new `Searcher` off to the side, and atomically
//!   swaps it into service without blocking concurrent reads.

pub mod config;
pub mod data;
pub mod refresh;
pub mod search;

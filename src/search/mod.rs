//! Fuzzy Watch-List Search
//!
//! ## Layout
//!
//! - `normalizer` — accent folding, casing, and tokenization applied to every
//!   indexed and queried string
//! - `similarity` — the Jaro-Winkler variant and token scoring used for ranking
//! - `store` — precomputed per-list indexes and the top-N ranker
//! - `searcher` — an immutable snapshot over all four lists, swapped wholesale
//!   by the refresh pipeline
//! - `handlers` — the `/search` HTTP surface
//!
//! A [`searcher::Searcher`] is built once per refresh cycle and never mutated,
//! so request handlers read it without coordination.

pub mod handlers;
pub mod normalizer;
pub mod searcher;
pub mod similarity;
pub mod store;
pub mod types;

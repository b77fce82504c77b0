//! Text Normalization
//!
//! Every string that enters the index or arrives as a query goes through the
//! same pipeline: decompose accents and drop the combining marks, lowercase,
//! replace punctuation with spaces (keeping hyphens that join two words), and
//! collapse runs of whitespace. The output is stable under re-normalization.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Leading articles carry no signal in address lines and are dropped from
/// both sides of an address comparison.
const ARTICLES: [&str; 3] = ["the", "a", "an"];

static SURNAME_PRECEDES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*),\s?(.*)$").unwrap());

/// Folds a string to its canonical lowercase ASCII-ish form.
pub fn normalize(input: &str) -> String {
    let mut chars: Vec<char> = Vec::with_capacity(input.len());
    for c in input.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        for lower in c.to_lowercase() {
            if lower.is_alphanumeric() || lower == '-' {
                chars.push(lower);
            } else {
                chars.push(' ');
            }
        }
    }
    // a hyphen only survives between two word characters
    for i in 0..chars.len() {
        if chars[i] == '-' {
            let joined = i > 0
                && chars[i - 1].is_alphanumeric()
                && i + 1 < chars.len()
                && chars[i + 1].is_alphanumeric();
            if !joined {
                chars[i] = ' ';
            }
        }
    }
    let collapsed: String = chars.iter().collect();
    collapsed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes and splits into tokens.
pub fn normalize_tokens(input: &str) -> Vec<String> {
    normalize(input)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Normalized address form: tokenized with articles removed, rejoined into a
/// single comparable line.
pub fn normalize_address_part(input: &str) -> String {
    let mut tokens = normalize_tokens(input);
    tokens.retain(|t| !ARTICLES.contains(&t.as_str()));
    tokens.join(" ")
}

/// Rewrites a surname-first individual name (`"BUSH, George W"`) into natural
/// order (`"George W BUSH"`). Names without a comma pass through unchanged.
pub fn reorder_individual_name(name: &str) -> String {
    match SURNAME_PRECEDES.captures(name) {
        Some(caps) => format!("{} {}", &caps[2], &caps[1]).trim().to_string(),
        None => name.to_string(),
    }
}

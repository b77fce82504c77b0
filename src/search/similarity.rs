//! String Similarity
//!
//! A Jaro scorer with a narrower match window than the textbook variant:
//! characters may pair only when their positions differ by at most
//! `max(len)/2 - 2`. Each out-of-position pairing counts half a
//! transposition. Name comparisons add the Winkler prefix boost above 0.7;
//! address comparisons use the plain Jaro value.
//!
//! Scores are ranked at full precision and rounded to three decimals only
//! when they leave the process.

/// Jaro similarity between two strings. Returns 0.0 when either side is
/// empty or no characters pair up.
pub fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(2);
    let mut used = vec![false; b.len()];
    let mut matches = 0usize;
    let mut half_transpositions = 0usize;

    for (i, &ca) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for j in lo..hi {
            if !used[j] && b[j] == ca {
                used[j] = true;
                matches += 1;
                if i != j {
                    half_transpositions += 1;
                }
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }
    let m = matches as f64;
    let t = (half_transpositions / 2) as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Jaro with the Winkler common-prefix boost, applied only above 0.7.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let score = jaro(a, b);
    if score <= 0.7 {
        return score;
    }
    let prefix = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
        .min(4);
    score + 0.1 * prefix as f64 * (1.0 - score)
}

/// Scores a tokenized query against a tokenized indexed name: each query
/// token takes its best match among the indexed tokens, and the per-token
/// bests are averaged. Surplus indexed tokens cost nothing.
pub fn token_score(query: &[String], indexed: &[String]) -> f64 {
    if query.is_empty() || indexed.is_empty() {
        return 0.0;
    }
    let total: f64 = query
        .iter()
        .map(|q| {
            indexed
                .iter()
                .map(|t| jaro_winkler(q, t))
                .fold(0.0, f64::max)
        })
        .sum();
    total / query.len() as f64
}

/// Rounds a score to the three decimals carried on the wire.
pub fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

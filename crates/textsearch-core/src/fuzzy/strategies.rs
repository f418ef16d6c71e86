//! Fuzzy matching strategies
//!
//! Each strategy rates how well a lowercased query matches a lowercased
//! value, as a similarity in (0, 1]. The engine turns similarities into
//! distances (`1.0 - score`).

use strsim::{jaro_winkler, levenshtein};

/// Match result from a strategy
#[derive(Debug, Clone)]
pub struct StrategyMatch {
    pub score: f64,
    pub strategy: &'static str,
}

/// Try exact match (score: 1.0)
#[inline]
pub fn exact_match(query: &str, item: &str) -> Option<StrategyMatch> {
    if query == item {
        Some(StrategyMatch {
            score: 1.0,
            strategy: "exact",
        })
    } else {
        None
    }
}

/// Try prefix match (score: 0.9)
#[inline]
pub fn prefix_match(query: &str, item: &str) -> Option<StrategyMatch> {
    if item.starts_with(query) {
        Some(StrategyMatch {
            score: 0.9,
            strategy: "prefix",
        })
    } else {
        None
    }
}

/// Try word boundary match (score: 0.85)
/// Matches when query equals a complete word in item (split on whitespace, underscore, hyphen)
#[inline]
pub fn word_boundary_match(query: &str, item: &str) -> Option<StrategyMatch> {
    item.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .any(|word| word == query)
        .then_some(StrategyMatch {
            score: 0.85,
            strategy: "word_boundary",
        })
}

/// Try substring match (score: 0.65-0.75), earlier positions score higher
#[inline]
pub fn substring_match(query: &str, item: &str) -> Option<StrategyMatch> {
    #[cfg(feature = "simd")]
    let pos = memchr::memmem::find(item.as_bytes(), query.as_bytes());

    #[cfg(not(feature = "simd"))]
    let pos = item.find(query);

    pos.map(|pos| {
        let pos_penalty = (pos as f64 / item.len() as f64) * 0.1;
        StrategyMatch {
            score: (0.75 - pos_penalty).max(0.65),
            strategy: "substring",
        }
    })
}

/// Try Jaro-Winkler similarity (score: 0.6-0.82)
#[inline]
pub fn jaro_winkler_match(query: &str, item: &str) -> Option<StrategyMatch> {
    let jw_score = jaro_winkler(query, item);
    if jw_score > 0.85 {
        // maps 0.85-1.0 to 0.6-0.82
        let score = (0.6 + (jw_score - 0.85) * 1.5).min(0.82);
        Some(StrategyMatch {
            score,
            strategy: "jaro_winkler",
        })
    } else {
        None
    }
}

/// Try Levenshtein edit distance (score: 0.6-0.8)
#[inline]
pub fn levenshtein_match(query: &str, item: &str, max_edit_distance: usize) -> Option<StrategyMatch> {
    let edit_dist = levenshtein(query, item);
    if edit_dist > max_edit_distance {
        return None;
    }
    let max_len = query.chars().count().max(item.chars().count());
    if max_len == 0 {
        return None;
    }
    let score = 0.8 - (edit_dist as f64 / max_len as f64) * 0.4;
    (score >= 0.6).then_some(StrategyMatch {
        score,
        strategy: "levenshtein",
    })
}

/// Apply all strategies in order, return first match
pub fn score_match(
    query_lower: &str,
    item_lower: &str,
    min_fuzzy_length: usize,
    max_edit_distance: usize,
) -> Option<StrategyMatch> {
    if let Some(m) = exact_match(query_lower, item_lower) {
        return Some(m);
    }

    if let Some(m) = prefix_match(query_lower, item_lower) {
        return Some(m);
    }

    if let Some(m) = word_boundary_match(query_lower, item_lower) {
        return Some(m);
    }

    if let Some(m) = substring_match(query_lower, item_lower) {
        return Some(m);
    }

    // Skip expensive fuzzy matching for short queries
    if query_lower.chars().count() < min_fuzzy_length {
        return None;
    }

    if let Some(m) = jaro_winkler_match(query_lower, item_lower) {
        return Some(m);
    }

    levenshtein_match(query_lower, item_lower, max_edit_distance)
}

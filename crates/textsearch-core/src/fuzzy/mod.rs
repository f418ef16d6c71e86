//! Fuzzy Matching Engine
//!
//! Weighted multi-field approximate matching over flat records. The engine
//! knows nothing about quads: it gets records with string values under key
//! paths, plus one weight per key.
//!
//! # Strategies (in order of specificity)
//!
//! 1. Exact match (distance: 0.0)
//! 2. Prefix match (distance: 0.1)
//! 3. Word boundary match (distance: 0.15)
//! 4. Substring match (distance: 0.25-0.35)
//! 5. Jaro-Winkler similarity (distance: 0.18-0.4)
//! 6. Levenshtein edit distance (distance: 0.2-0.4)
//!
//! # Example
//!
//! ```rust
//! use textsearch_core::fuzzy::{EngineConfig, FuzzyIndex, FuzzyRecord, WeightedKey};
//!
//! let record = FuzzyRecord {
//!     id: "a".into(),
//!     fields: [("1".to_string(), vec!["full text search".to_string()])].into(),
//! };
//! let index = FuzzyIndex::build(vec![record], vec![WeightedKey::new("1", 1.0)], EngineConfig::default());
//!
//! let hits = index.search("search");
//! assert_eq!(hits[0].id, "a");
//! ```

mod engine;
mod strategies;

pub use engine::{EngineConfig, FuzzyHit, FuzzyIndex, FuzzyRecord, WeightedKey};

//! Text Search Core
//!
//! Fuzzy full-text search over RDF datasets. A `TextSearchDataset` wraps a
//! quad store and mirrors every added or deleted quad into one or more
//! `TextIndex`es. Each index folds the values of selected predicates into
//! one document per subject and answers fuzzy queries with the matching
//! subjects, best first.
//!
//! # Features
//!
//! - `simd` - SIMD-accelerated substring search via memchr
//!
//! # Example
//!
//! ```rust
//! use textsearch_core::term::{Quad, Term};
//! use textsearch_core::{TextSearchConfig, TextSearchDataset};
//!
//! let label = Term::named("http://example.org/label");
//! let mut dataset = TextSearchDataset::new(TextSearchConfig::new().field(label.value())).unwrap();
//!
//! dataset
//!     .add(Quad::triple(Term::named("http://example.org/a"), label.clone(), Term::literal("test")))
//!     .add(Quad::triple(Term::named("http://example.org/b"), label.clone(), Term::literal("text")));
//!
//! let results = dataset.search_default("test").unwrap();
//! assert_eq!(results[0], Term::named("http://example.org/a"));
//! assert!(results.scores()[0] < results.scores()[1]);
//! ```

pub mod collection;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod shared;
pub mod term;

// Re-export main types at crate root
pub use collection::{text_search_dataset, TextSearchDataset};
pub use config::{FieldSpec, TextSearchConfig, DEFAULT_INDEX};
pub use dataset::{Dataset, DatasetFactory, MemoryDataset, MemoryFactory};
pub use error::{Result, SearchError};
pub use fuzzy::EngineConfig;
pub use index::{SearchResults, TextIndex};
pub use shared::SharedTextSearchDataset;
pub use term::{Quad, Term};

//! Fuzzy full-text search over RDF datasets.
//!
//! Re-exports the `textsearch-core` API and adds logging setup for
//! applications embedding it.
//!
//! ```rust
//! use textsearch::{Quad, Term, TextSearchConfig};
//!
//! let mut dataset = textsearch::text_search_dataset(
//!     TextSearchConfig::new().field("http://example.org/label"),
//! ).unwrap();
//!
//! dataset.add(Quad::triple(
//!     Term::named("http://example.org/a"),
//!     Term::named("http://example.org/label"),
//!     Term::literal("Full text search"),
//! ));
//!
//! let results = dataset.search_default("search").unwrap();
//! assert_eq!(results.len(), 1);
//! ```

pub mod tracing;

pub use textsearch_core::*;

//! Field-weighted document index
//!
//! A `TextIndex` folds quads into one document per subject: every value of
//! an indexed predicate lands in the subject's document under the field's
//! id. The fuzzy search structure is derived from the documents and rebuilt
//! lazily, on the first search after a mutation.
//!
//! # Example
//!
//! ```rust
//! use textsearch_core::config::FieldSpec;
//! use textsearch_core::index::TextIndex;
//! use textsearch_core::term::{Quad, Term};
//!
//! let mut index = TextIndex::new(&[FieldSpec::new("http://example.org/label")]).unwrap();
//!
//! index.add(&Quad::triple(
//!     Term::named("http://example.org/alice"),
//!     Term::named("http://example.org/label"),
//!     Term::literal("Alice"),
//! ));
//!
//! let results = index.search("alice");
//! assert_eq!(results[0], Term::named("http://example.org/alice"));
//! assert_eq!(results.scores()[0], 0.0);
//! ```

mod document;
mod results;
mod text_index;

pub use document::{Document, Field};
pub use results::SearchResults;
pub use text_index::TextIndex;

//! RDF terms and quads - the statement model indexed by text search datasets
//!
//! A quad is a subject-predicate-object statement scoped to a graph. Terms
//! carry RDF/JS-style values (`Term::value`) and a canonical N-Triples
//! encoding (`Term::to_ntriples`) used as a stable key.
//!
//! # Example
//!
//! ```rust
//! use textsearch_core::term::{Quad, Term};
//!
//! let quad = Quad::triple(
//!     Term::named("http://example.org/alice"),
//!     Term::named("http://example.org/label"),
//!     Term::literal("Alice"),
//! );
//!
//! assert_eq!(quad.subject.to_ntriples(), "<http://example.org/alice>");
//! assert_eq!(quad.object.value(), "Alice");
//! ```

mod types;

pub use types::{Quad, Term, XSD_STRING, RDF_LANG_STRING};

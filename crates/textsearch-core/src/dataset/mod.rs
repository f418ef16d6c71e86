//! Dataset abstraction for quad storage
//!
//! This module defines the `Dataset` trait that text search datasets wrap.
//! Any quad store offering add/delete/has/match/iterate can back a
//! `TextSearchDataset`; the crate ships one implementation:
//!
//! - **Memory**: insertion-ordered in-memory quad set (`MemoryDataset`)
//!
//! Stores are created through a `DatasetFactory` when the caller doesn't hand
//! one over directly.
//!
//! # Example
//!
//! ```rust
//! use textsearch_core::dataset::{Dataset, MemoryDataset};
//! use textsearch_core::term::{Quad, Term};
//!
//! let mut dataset = MemoryDataset::new();
//!
//! let quad = Quad::triple(
//!     Term::named("http://example.org/alice"),
//!     Term::named("http://example.org/label"),
//!     Term::literal("Alice"),
//! );
//!
//! dataset.add(quad.clone());
//! assert!(dataset.has(&quad));
//! assert_eq!(dataset.len(), 1);
//! ```

mod memory;
mod traits;

pub use memory::{MemoryDataset, MemoryFactory};
pub use traits::{Dataset, DatasetFactory, DatasetStats};

//! Dataset trait definitions

use crate::term::{Quad, Term};

/// Core operations of a quad store.
///
/// Set semantics: adding a quad that is already present leaves the store
/// unchanged. Operations are infallible and synchronous.
pub trait Dataset {
    /// Add a quad. Returns `true` if it was not present before.
    fn add(&mut self, quad: Quad) -> bool;

    /// Delete a quad. Returns `true` if it was present.
    fn delete(&mut self, quad: &Quad) -> bool;

    /// Check if a quad is present.
    fn has(&self, quad: &Quad) -> bool;

    /// Return a new dataset holding every quad that matches the pattern.
    /// `None` positions are wildcards.
    fn match_quads(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        graph: Option<&Term>,
    ) -> Self
    where
        Self: Sized;

    /// Number of quads in the store.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all quads in the store's natural order.
    fn iter(&self) -> Box<dyn Iterator<Item = &Quad> + '_>;
}

/// Creates empty datasets.
pub trait DatasetFactory {
    type Dataset: Dataset;

    fn dataset(&self) -> Self::Dataset;
}

/// Dataset statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub total_quads: usize,
    pub unique_subjects: usize,
    pub unique_predicates: usize,
    pub unique_graphs: usize,
}

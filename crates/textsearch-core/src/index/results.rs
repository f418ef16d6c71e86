//! Search results

use std::ops::Deref;

use crate::term::Term;

/// Ranked subjects with a parallel list of scores.
///
/// Dereferences to the subject slice; `scores()[i]` belongs to `self[i]`.
/// Scores ascend: 0.0 is an exact match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    terms: Vec<Term>,
    scores: Vec<f64>,
}

impl SearchResults {
    pub(crate) fn new(terms: Vec<Term>, scores: Vec<f64>) -> Self {
        debug_assert_eq!(terms.len(), scores.len());
        Self { terms, scores }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Iterate over (subject, score) pairs
    pub fn iter_scored(&self) -> impl Iterator<Item = (&Term, f64)> {
        self.terms.iter().zip(self.scores.iter().copied())
    }

    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }
}

impl Deref for SearchResults {
    type Target = [Term];

    fn deref(&self) -> &[Term] {
        &self.terms
    }
}

impl IntoIterator for SearchResults {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

//! In-memory dataset backend
//!
//! A map-based quad set that remembers insertion order, so iteration (and
//! bulk seeding of search indexes) is deterministic. No persistence.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::dataset::traits::{Dataset, DatasetFactory, DatasetStats};
use crate::term::{Quad, Term};

/// In-memory quad store.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataset {
    quads: BTreeMap<u64, Quad>,
    positions: HashMap<Quad, u64>,
    next_seq: u64,
}

impl MemoryDataset {
    /// Create a new empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dataset with initial quads.
    pub fn with_quads(quads: impl IntoIterator<Item = Quad>) -> Self {
        let mut dataset = Self::new();
        for quad in quads {
            dataset.add(quad);
        }
        dataset
    }

    /// Remove all quads.
    pub fn clear(&mut self) {
        self.quads.clear();
        self.positions.clear();
    }

    /// Get storage statistics.
    pub fn stats(&self) -> DatasetStats {
        let mut subjects: HashSet<&Term> = HashSet::new();
        let mut predicates: HashSet<&Term> = HashSet::new();
        let mut graphs: HashSet<&Term> = HashSet::new();

        for quad in self.quads.values() {
            subjects.insert(&quad.subject);
            predicates.insert(&quad.predicate);
            graphs.insert(&quad.graph);
        }

        DatasetStats {
            total_quads: self.quads.len(),
            unique_subjects: subjects.len(),
            unique_predicates: predicates.len(),
            unique_graphs: graphs.len(),
        }
    }
}

impl Dataset for MemoryDataset {
    fn add(&mut self, quad: Quad) -> bool {
        if self.positions.contains_key(&quad) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.positions.insert(quad.clone(), seq);
        self.quads.insert(seq, quad);
        true
    }

    fn delete(&mut self, quad: &Quad) -> bool {
        match self.positions.remove(quad) {
            Some(seq) => {
                self.quads.remove(&seq);
                true
            }
            None => false,
        }
    }

    fn has(&self, quad: &Quad) -> bool {
        self.positions.contains_key(quad)
    }

    fn match_quads(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        graph: Option<&Term>,
    ) -> Self {
        self.quads
            .values()
            .filter(|q| q.matches(subject, predicate, object, graph))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.quads.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Quad> + '_> {
        Box::new(self.quads.values())
    }
}

impl FromIterator<Quad> for MemoryDataset {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        Self::with_quads(iter)
    }
}

impl Extend<Quad> for MemoryDataset {
    fn extend<I: IntoIterator<Item = Quad>>(&mut self, iter: I) {
        for quad in iter {
            self.add(quad);
        }
    }
}

impl<'a> IntoIterator for &'a MemoryDataset {
    type Item = &'a Quad;
    type IntoIter = std::collections::btree_map::Values<'a, u64, Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.values()
    }
}

/// Default factory producing empty [`MemoryDataset`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryFactory;

impl DatasetFactory for MemoryFactory {
    type Dataset = MemoryDataset;

    fn dataset(&self) -> MemoryDataset {
        MemoryDataset::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ex(name: &str) -> Term {
        Term::named(format!("http://example.org/{}", name))
    }

    fn test_quad(subject: &str, value: &str) -> Quad {
        Quad::triple(ex(subject), ex("label"), Term::literal(value))
    }

    #[test]
    fn test_add_and_has() {
        let mut dataset = MemoryDataset::new();
        let quad = test_quad("subject0", "test");

        assert!(dataset.add(quad.clone()));
        assert!(dataset.has(&quad));
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_add_duplicate() {
        let mut dataset = MemoryDataset::new();
        let quad = test_quad("subject0", "test");

        assert!(dataset.add(quad.clone()));
        assert!(!dataset.add(quad));
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut dataset = MemoryDataset::new();
        let quad = test_quad("subject0", "test");
        dataset.add(quad.clone());

        assert!(dataset.delete(&quad));
        assert!(!dataset.delete(&quad));
        assert!(!dataset.has(&quad));
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let quads = vec![
            test_quad("subject2", "c"),
            test_quad("subject0", "a"),
            test_quad("subject1", "b"),
        ];
        let mut dataset = MemoryDataset::with_quads(quads.clone());

        let collected: Vec<Quad> = dataset.iter().cloned().collect();
        assert_eq!(collected, quads);

        // re-adding after delete moves the quad to the end
        dataset.delete(&quads[0]);
        dataset.add(quads[0].clone());
        let collected: Vec<&Quad> = (&dataset).into_iter().collect();
        assert_eq!(collected, vec![&quads[1], &quads[2], &quads[0]]);
    }

    #[test]
    fn test_match_quads() {
        let mut dataset = MemoryDataset::new();
        dataset.add(test_quad("subject0", "test"));
        dataset.add(test_quad("subject1", "text"));
        dataset.add(Quad::triple(ex("subject0"), ex("description"), Term::literal("d")));

        let by_subject = dataset.match_quads(Some(&ex("subject0")), None, None, None);
        assert_eq!(by_subject.len(), 2);

        let by_object = dataset.match_quads(None, None, Some(&Term::literal("text")), None);
        assert_eq!(by_object.len(), 1);
        assert!(by_object.has(&test_quad("subject1", "text")));

        let none = dataset.match_quads(None, None, None, Some(&ex("graph")));
        assert!(none.is_empty());
    }

    #[test]
    fn test_stats() {
        let mut dataset = MemoryDataset::new();
        dataset.add(test_quad("subject0", "test"));
        dataset.add(test_quad("subject1", "text"));
        dataset.add(Quad::new(
            ex("subject0"),
            ex("description"),
            Term::literal("d"),
            ex("graph"),
        ));

        let stats = dataset.stats();
        assert_eq!(stats.total_quads, 3);
        assert_eq!(stats.unique_subjects, 2);
        assert_eq!(stats.unique_predicates, 2);
        assert_eq!(stats.unique_graphs, 2);
    }

    #[test]
    fn test_factory_creates_empty_dataset() {
        let dataset = MemoryFactory.dataset();
        assert!(dataset.is_empty());
    }
}

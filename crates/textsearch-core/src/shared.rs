//! Thread-safe handle around a `TextSearchDataset`
//!
//! Text search datasets assume exclusive access. This wrapper puts the
//! whole dataset, indexes included, behind one mutex so that add, delete and
//! search (which may rebuild an index) never interleave.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::dataset::{Dataset, MemoryDataset};
use crate::error::Result;
use crate::index::SearchResults;
use crate::term::Quad;
use crate::TextSearchDataset;

/// Clonable, lock-protected text search dataset
pub struct SharedTextSearchDataset<D: Dataset = MemoryDataset> {
    inner: Arc<Mutex<TextSearchDataset<D>>>,
}

impl<D: Dataset> Clone for SharedTextSearchDataset<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: Dataset> SharedTextSearchDataset<D> {
    pub fn new(dataset: TextSearchDataset<D>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dataset)),
        }
    }

    pub fn add(&self, quad: Quad) {
        self.inner.lock().add(quad);
    }

    pub fn delete(&self, quad: &Quad) {
        self.inner.lock().delete(quad);
    }

    pub fn has(&self, quad: &Quad) -> bool {
        self.inner.lock().has(quad)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn search(&self, query: &str, index_name: &str) -> Result<SearchResults> {
        self.inner.lock().search(query, index_name)
    }

    /// Run `f` with exclusive access to the dataset
    pub fn with<R>(&self, f: impl FnOnce(&mut TextSearchDataset<D>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<D: Dataset> From<TextSearchDataset<D>> for SharedTextSearchDataset<D> {
    fn from(dataset: TextSearchDataset<D>) -> Self {
        Self::new(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;
    use crate::TextSearchConfig;
    use std::thread;

    fn ex(name: &str) -> Term {
        Term::named(format!("http://example.org/{}", name))
    }

    #[test]
    fn test_concurrent_adds() {
        let shared: SharedTextSearchDataset = TextSearchDataset::new(
            TextSearchConfig::new().field(ex("label").value()),
        )
        .unwrap()
        .into();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for j in 0..25 {
                        shared.add(Quad::triple(
                            ex(&format!("subject{}_{}", i, j)),
                            ex("label"),
                            Term::literal(format!("label {} {}", i, j)),
                        ));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 100);
        assert_eq!(shared.search("", "").unwrap().len(), 100);
        assert_eq!(shared.with(|ds| ds.index("").map(|i| i.len())), Some(100));
    }
}

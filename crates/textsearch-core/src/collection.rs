//! TextSearchDataset - a quad dataset with named full-text indexes

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{TextSearchConfig, DEFAULT_INDEX};
use crate::dataset::{Dataset, DatasetFactory, MemoryDataset, MemoryFactory};
use crate::error::{Result, SearchError};
use crate::index::{SearchResults, TextIndex};
use crate::term::{Quad, Term};

/// A dataset whose mutations are mirrored into one or more text indexes.
///
/// Every `add`/`delete` goes to each index first, then to the wrapped
/// dataset. Containment, matching, iteration and size come straight from
/// the dataset.
pub struct TextSearchDataset<D: Dataset = MemoryDataset> {
    dataset: D,
    indexes: BTreeMap<String, TextIndex>,
}

impl TextSearchDataset<MemoryDataset> {
    /// Create an empty in-memory text search dataset
    pub fn new(config: TextSearchConfig) -> Result<Self> {
        Self::with_factory(&MemoryFactory, config)
    }
}

impl<D: Dataset> TextSearchDataset<D> {
    /// Create a text search dataset over an empty dataset from `factory`
    pub fn with_factory<F>(factory: &F, config: TextSearchConfig) -> Result<Self>
    where
        F: DatasetFactory<Dataset = D>,
    {
        let indexes = build_indexes(&config)?;
        Ok(Self {
            dataset: factory.dataset(),
            indexes,
        })
    }

    /// Wrap an existing dataset. Quads already in it are fed to every index
    /// in the dataset's iteration order.
    pub fn with_dataset(dataset: D, config: TextSearchConfig) -> Result<Self> {
        let mut indexes = build_indexes(&config)?;

        for quad in dataset.iter() {
            for index in indexes.values_mut() {
                index.add(quad);
            }
        }
        debug!(
            "Seeded {} indexes from {} existing quads",
            indexes.len(),
            dataset.len()
        );

        Ok(Self { dataset, indexes })
    }

    /// Add a quad to every index and to the dataset
    pub fn add(&mut self, quad: Quad) -> &mut Self {
        for index in self.indexes.values_mut() {
            index.add(&quad);
        }
        self.dataset.add(quad);
        self
    }

    /// Delete a quad from every index and from the dataset
    pub fn delete(&mut self, quad: &Quad) -> &mut Self {
        for index in self.indexes.values_mut() {
            index.delete(quad);
        }
        self.dataset.delete(quad);
        self
    }

    /// Search the named index
    pub fn search(&mut self, query: &str, index_name: &str) -> Result<SearchResults> {
        let index = self
            .indexes
            .get_mut(index_name)
            .ok_or_else(|| SearchError::UnknownIndex(index_name.to_string()))?;

        let results = index.search(query);
        debug!(
            "Search '{}' on index '{}': {} hits",
            query,
            index_name,
            results.len()
        );
        Ok(results)
    }

    /// Search the default index
    pub fn search_default(&mut self, query: &str) -> Result<SearchResults> {
        self.search(query, DEFAULT_INDEX)
    }

    pub fn has(&self, quad: &Quad) -> bool {
        self.dataset.has(quad)
    }

    /// Quads matching the pattern, as a new dataset. `None` is a wildcard.
    pub fn match_quads(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        graph: Option<&Term>,
    ) -> D {
        self.dataset.match_quads(subject, predicate, object, graph)
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &Quad> + '_> {
        self.dataset.iter()
    }

    /// The wrapped dataset
    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn into_dataset(self) -> D {
        self.dataset
    }

    pub fn index(&self, name: &str) -> Option<&TextIndex> {
        self.indexes.get(name)
    }

    pub fn index_names(&self) -> impl Iterator<Item = &str> {
        self.indexes.keys().map(String::as_str)
    }
}

impl<'a, D: Dataset> IntoIterator for &'a TextSearchDataset<D> {
    type Item = &'a Quad;
    type IntoIter = Box<dyn Iterator<Item = &'a Quad> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.dataset.iter()
    }
}

impl<D: Dataset> Extend<Quad> for TextSearchDataset<D> {
    fn extend<I: IntoIterator<Item = Quad>>(&mut self, iter: I) {
        for quad in iter {
            self.add(quad);
        }
    }
}

fn build_indexes(config: &TextSearchConfig) -> Result<BTreeMap<String, TextIndex>> {
    config
        .field_sets()?
        .into_iter()
        .map(|(name, fields)| {
            let index = TextIndex::with_config(&fields, config.engine.clone())?;
            Ok((name, index))
        })
        .collect()
}

/// Create an in-memory text search dataset
pub fn text_search_dataset(config: TextSearchConfig) -> Result<TextSearchDataset> {
    TextSearchDataset::new(config)
}

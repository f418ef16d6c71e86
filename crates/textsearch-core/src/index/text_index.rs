//! TextIndex - per-subject documents over weighted fields

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace, warn};

use super::document::{Document, Field};
use super::results::SearchResults;
use crate::config::FieldSpec;
use crate::error::{Result, SearchError};
use crate::fuzzy::{EngineConfig, FuzzyIndex, WeightedKey};
use crate::term::{Quad, Term};

/// Field-weighted document index over quads.
///
/// Quads whose predicate isn't a registered field are ignored. Any change to
/// the documents marks the index dirty; the next search rebuilds the fuzzy
/// structure from scratch.
pub struct TextIndex {
    fields: Vec<Field>,
    by_predicate: HashMap<String, usize>,
    docs: BTreeMap<u64, Document>,
    positions: HashMap<String, u64>,
    next_seq: u64,
    subjects: HashMap<String, Term>,
    engine_config: EngineConfig,
    fuzzy: Option<FuzzyIndex>,
    dirty: bool,
}

impl TextIndex {
    /// Create an index with default engine configuration
    pub fn new(fields: &[FieldSpec]) -> Result<Self> {
        Self::with_config(fields, EngineConfig::default())
    }

    /// Create an index with custom engine configuration.
    ///
    /// Field ids are assigned in list order starting at "1". A predicate
    /// listed twice keeps its first registration.
    pub fn with_config(fields: &[FieldSpec], engine_config: EngineConfig) -> Result<Self> {
        let mut registered = Vec::with_capacity(fields.len());
        let mut by_predicate = HashMap::with_capacity(fields.len());

        for spec in fields {
            let weight = spec.weight();
            if !weight.is_finite() || weight <= 0.0 {
                return Err(SearchError::Configuration(format!(
                    "weight of field '{}' must be positive, got {}",
                    spec.predicate, weight
                )));
            }
            if by_predicate.contains_key(&spec.predicate) {
                warn!("Field '{}' registered twice, keeping the first", spec.predicate);
                continue;
            }

            by_predicate.insert(spec.predicate.clone(), registered.len());
            registered.push(Field {
                id: (registered.len() + 1).to_string(),
                predicate: spec.predicate.clone(),
                weight,
            });
        }

        Ok(Self {
            fields: registered,
            by_predicate,
            docs: BTreeMap::new(),
            positions: HashMap::new(),
            next_seq: 0,
            subjects: HashMap::new(),
            engine_config,
            fuzzy: None,
            dirty: true,
        })
    }

    /// Index the quad's object value if its predicate is a registered field
    pub fn add(&mut self, quad: &Quad) {
        let Some(field_id) = self.field_id(&quad.predicate) else {
            return;
        };

        let doc_id = quad.subject.to_ntriples();
        let existing = self.positions.get(&doc_id).copied();
        let seq = match existing {
            Some(seq) => seq,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.positions.insert(doc_id.clone(), seq);
                self.subjects.insert(doc_id.clone(), quad.subject.clone());
                self.docs.insert(seq, Document::new(doc_id.clone()));
                seq
            }
        };

        if let Some(doc) = self.docs.get_mut(&seq) {
            doc.push(&field_id, quad.object.value().to_string());
            trace!("Indexed field {} of {}", field_id, doc_id);
            self.dirty = true;
        }
    }

    /// Remove one occurrence of the quad's object value.
    ///
    /// Values are matched by string equality, so of several quads sharing a
    /// subject, predicate and object value, any one removes the same entry.
    pub fn delete(&mut self, quad: &Quad) {
        let Some(field_id) = self.field_id(&quad.predicate) else {
            return;
        };

        let doc_id = quad.subject.to_ntriples();
        let Some(&seq) = self.positions.get(&doc_id) else {
            return;
        };
        let Some(doc) = self.docs.get_mut(&seq) else {
            return;
        };

        if !doc.remove(&field_id, quad.object.value()) {
            return;
        }

        if doc.is_empty() {
            self.docs.remove(&seq);
            self.positions.remove(&doc_id);
            self.subjects.remove(&doc_id);
            trace!("Removed empty document {}", doc_id);
        }

        self.dirty = true;
    }

    /// Rebuild the fuzzy structure if any document changed since the last build
    pub fn ensure_built(&mut self) {
        if !self.dirty {
            return;
        }

        let keys = self.normalized_weights();
        let records = self.docs.values().map(Document::to_record);
        let fuzzy = FuzzyIndex::build(records, keys, self.engine_config.clone());

        debug!(
            "Rebuilt fuzzy index: {} documents, {} fields, fingerprint {}",
            fuzzy.len(),
            self.fields.len(),
            fuzzy.fingerprint()
        );

        self.fuzzy = Some(fuzzy);
        self.dirty = false;
    }

    /// Search the documents, best matches first
    pub fn search(&mut self, query: &str) -> SearchResults {
        self.ensure_built();

        let Some(fuzzy) = &self.fuzzy else {
            return SearchResults::default();
        };

        let (terms, scores): (Vec<Term>, Vec<f64>) = fuzzy
            .search(query)
            .into_iter()
            .filter_map(|hit| {
                self.subjects
                    .get(&hit.id)
                    .map(|subject| (subject.clone(), hit.score))
            })
            .unzip();

        SearchResults::new(terms, scores)
    }

    /// Field weights divided by their sum, in registration order
    pub fn normalized_weights(&self) -> Vec<WeightedKey> {
        let weight_sum: f64 = self.fields.iter().map(|f| f.weight).sum();

        self.fields
            .iter()
            .map(|f| WeightedKey::new(f.id.clone(), f.weight / weight_sum))
            .collect()
    }

    /// Registered fields in registration order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by predicate IRI
    pub fn field(&self, predicate: &str) -> Option<&Field> {
        self.by_predicate.get(predicate).map(|&i| &self.fields[i])
    }

    /// Look up a document by its id (the subject's N-Triples encoding)
    pub fn document(&self, doc_id: &str) -> Option<&Document> {
        self.positions
            .get(doc_id)
            .and_then(|seq| self.docs.get(seq))
    }

    /// Documents in creation order
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.docs.values()
    }

    /// Original subject term of a document
    pub fn subject(&self, doc_id: &str) -> Option<&Term> {
        self.subjects.get(doc_id)
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// True when the next search will rebuild the fuzzy structure
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn field_id(&self, predicate: &Term) -> Option<String> {
        self.field(predicate.value()).map(|f| f.id.clone())
    }
}

//! Field and document types

use std::collections::BTreeMap;

use crate::fuzzy::FuzzyRecord;

/// An indexed predicate
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Sequential id, "1" for the first registered field
    pub id: String,
    /// Predicate IRI
    pub predicate: String,
    pub weight: f64,
}

/// All indexed values of one subject, grouped by field id.
///
/// Values keep insertion order and may repeat. A document never holds an
/// empty value list.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: String,
    fields: BTreeMap<String, Vec<String>>,
}

impl Document {
    pub(crate) fn new(id: String) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    /// Canonical N-Triples encoding of the subject
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn values(&self, field_id: &str) -> Option<&[String]> {
        self.fields.get(field_id).map(Vec::as_slice)
    }

    /// Iterate over (field id, values) pairs
    pub fn fields(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// True when no field holds a value
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn push(&mut self, field_id: &str, value: String) {
        self.fields
            .entry(field_id.to_string())
            .or_default()
            .push(value);
    }

    /// Remove the first occurrence of `value`, dropping the field entry if
    /// it ends up empty. Returns `false` if nothing was removed.
    pub(crate) fn remove(&mut self, field_id: &str, value: &str) -> bool {
        let Some(values) = self.fields.get_mut(field_id) else {
            return false;
        };
        let Some(pos) = values.iter().position(|v| v == value) else {
            return false;
        };

        values.remove(pos);
        if values.is_empty() {
            self.fields.remove(field_id);
        }
        true
    }

    pub(crate) fn to_record(&self) -> FuzzyRecord {
        FuzzyRecord {
            id: self.id.clone(),
            fields: self
                .fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

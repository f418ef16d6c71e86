//! Text search configuration
//!
//! Describes which predicates get indexed, under which index names, and how
//! the fuzzy engine behaves. Loadable from JSON:
//!
//! ```rust
//! use textsearch_core::TextSearchConfig;
//!
//! let config = TextSearchConfig::from_json(r#"{
//!     "indexes": {
//!         "": [{ "predicate": "http://example.org/label" }],
//!         "description": [{ "predicate": "http://example.org/description", "weight": 2.0 }]
//!     },
//!     "engine": { "threshold": 0.4 }
//! }"#).unwrap();
//!
//! assert_eq!(config.engine.threshold, 0.4);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, SearchError};
use crate::fuzzy::EngineConfig;
use crate::term::Term;

/// Name of the default index
pub const DEFAULT_INDEX: &str = "";

/// An indexed predicate with an optional weight (1.0 when omitted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Predicate IRI
    pub predicate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl FieldSpec {
    pub fn new(predicate: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            weight: None,
        }
    }

    pub fn weighted(predicate: impl Into<String>, weight: f64) -> Self {
        Self {
            predicate: predicate.into(),
            weight: Some(weight),
        }
    }

    /// Field spec for a predicate term, keyed by the term's value
    pub fn from_term(predicate: &Term) -> Self {
        Self::new(predicate.value())
    }

    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

/// Construction parameters for a `TextSearchDataset`.
///
/// `fields` builds the default index; `indexes` builds one index per entry.
/// At least one of them is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSearchConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexes: Option<BTreeMap<String, Vec<FieldSpec>>>,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl TextSearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a field with weight 1.0 to the default index
    pub fn field(self, predicate: impl Into<String>) -> Self {
        self.push_field(FieldSpec::new(predicate))
    }

    /// Add a weighted field to the default index
    pub fn weighted_field(self, predicate: impl Into<String>, weight: f64) -> Self {
        self.push_field(FieldSpec::weighted(predicate, weight))
    }

    /// Set the default index fields, possibly empty
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        self.fields = Some(fields.into_iter().collect());
        self
    }

    /// Add a named index
    pub fn index(
        mut self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = FieldSpec>,
    ) -> Self {
        self.indexes
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), fields.into_iter().collect());
        self
    }

    pub fn engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    fn push_field(mut self, field: FieldSpec) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field);
        self
    }

    /// Resolve the configuration into (index name, fields) pairs.
    pub(crate) fn field_sets(&self) -> Result<Vec<(String, Vec<FieldSpec>)>> {
        if self.fields.is_none() && self.indexes.is_none() {
            return Err(SearchError::Configuration(
                "fields or indexes argument is required".to_string(),
            ));
        }

        let mut sets = Vec::new();

        if let Some(fields) = &self.fields {
            sets.push((DEFAULT_INDEX.to_string(), fields.clone()));
        }

        if let Some(indexes) = &self.indexes {
            for (name, fields) in indexes {
                if name == DEFAULT_INDEX && self.fields.is_some() {
                    return Err(SearchError::Configuration(
                        "default index given both as fields and as indexes entry".to_string(),
                    ));
                }
                sets.push((name.clone(), fields.clone()));
            }
        }

        Ok(sets)
    }
}

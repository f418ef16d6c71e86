//! FuzzyIndex - weighted multi-field fuzzy matching over flat records

use super::strategies;
use ahash::AHasher;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tracing::trace;

/// A flat record: an identifier plus string values per key path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuzzyRecord {
    pub id: String,
    pub fields: HashMap<String, Vec<String>>,
}

/// A searchable key with its weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedKey {
    pub name: String,
    pub weight: f64,
}

impl WeightedKey {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// A ranked hit. Lower scores are better; 0.0 is an exact match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyHit {
    pub id: String,
    pub score: f64,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// A record is a hit when at least one key is within this distance
    pub threshold: f64,
    pub max_edit_distance: usize,
    pub min_fuzzy_length: usize,
    /// Maximum number of hits, unlimited when `None`
    pub limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            max_edit_distance: 2,
            min_fuzzy_length: 3,
            limit: None,
        }
    }
}

struct PreparedRecord {
    id: String,
    // lowercased values, one slot per key
    values: Vec<Vec<String>>,
}

/// Immutable fuzzy search structure.
///
/// Built once from a full record set; never updated in place. A key's
/// distance is the best distance over its values. Record score is the
/// weighted mean of the distances of keys within the threshold, so an exact
/// hit on any single key scores 0.0 and no score exceeds the threshold.
pub struct FuzzyIndex {
    records: Vec<PreparedRecord>,
    keys: Vec<WeightedKey>,
    fingerprint: String,
    config: EngineConfig,
}

impl FuzzyIndex {
    /// Build the index from records and weighted keys
    pub fn build(
        records: impl IntoIterator<Item = FuzzyRecord>,
        keys: Vec<WeightedKey>,
        config: EngineConfig,
    ) -> Self {
        let records: Vec<PreparedRecord> = records
            .into_iter()
            .map(|record| PreparedRecord {
                values: keys
                    .iter()
                    .map(|key| {
                        record
                            .fields
                            .get(&key.name)
                            .map(|values| values.iter().map(|v| v.to_lowercase()).collect())
                            .unwrap_or_default()
                    })
                    .collect(),
                id: record.id,
            })
            .collect();

        let fingerprint = compute_fingerprint(&records, &keys);

        Self {
            records,
            keys,
            fingerprint,
            config,
        }
    }

    /// Search all records, best matches first.
    ///
    /// An empty (or whitespace-only) query matches every record with score 0.0.
    pub fn search(&self, query: &str) -> Vec<FuzzyHit> {
        let query_lower = query.trim().to_lowercase();

        let mut hits: Vec<FuzzyHit> = if query_lower.is_empty() {
            self.records
                .iter()
                .map(|record| FuzzyHit {
                    id: record.id.clone(),
                    score: 0.0,
                })
                .collect()
        } else {
            self.records
                .iter()
                .filter_map(|record| self.score_record(&query_lower, record))
                .collect()
        };

        // stable: ties keep record order
        hits.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if let Some(limit) = self.config.limit {
            hits.truncate(limit);
        }
        hits
    }

    fn score_record(&self, query_lower: &str, record: &PreparedRecord) -> Option<FuzzyHit> {
        let mut matched_weight = 0.0;
        let mut weighted_distance = 0.0;

        for (key, values) in self.keys.iter().zip(&record.values) {
            let distance = values
                .iter()
                .map(|value| self.distance(query_lower, value))
                .fold(1.0_f64, f64::min);

            // keys without a match within the threshold don't count
            if distance <= self.config.threshold {
                matched_weight += key.weight;
                weighted_distance += key.weight * distance;
            }
        }

        (matched_weight > 0.0).then(|| FuzzyHit {
            id: record.id.clone(),
            score: (weighted_distance / matched_weight).min(self.config.threshold),
        })
    }

    fn distance(&self, query_lower: &str, value_lower: &str) -> f64 {
        match strategies::score_match(
            query_lower,
            value_lower,
            self.config.min_fuzzy_length,
            self.config.max_edit_distance,
        ) {
            Some(m) => {
                trace!(
                    "'{}' ~ '{}': {} ({:.3})",
                    query_lower,
                    value_lower,
                    m.strategy,
                    m.score
                );
                (1.0 - m.score).max(0.0)
            }
            None => 1.0,
        }
    }

    /// Number of indexed records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> &[WeightedKey] {
        &self.keys
    }

    /// Hash over record contents and key names, for change detection in logs
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn compute_fingerprint(records: &[PreparedRecord], keys: &[WeightedKey]) -> String {
    let mut hasher = AHasher::default();
    for key in keys {
        key.name.hash(&mut hasher);
    }
    for record in records {
        record.id.hash(&mut hasher);
        record.values.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}

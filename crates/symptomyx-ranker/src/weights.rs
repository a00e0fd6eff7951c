//! Rarity-based symptom weights.
//!
//! w(s) = 1 / sqrt(n(s)), where n(s) is the number of conditions listing s.
//! Symptoms specific to one condition keep full weight; widely shared ones
//! (cough, fever) contribute progressively less to the similarity score.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use symptomyx_common::{lookup_or, ConditionTable};
use tracing::debug;

/// Weight applied to any symptom absent from the map.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Symptom → weight map with a 1.0 fallback for unseen symptoms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomWeights {
    weights: HashMap<String, f64>,
}

impl SymptomWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit weight for a symptom.
    pub fn with(mut self, symptom: &str, weight: f64) -> Self {
        self.weights.insert(symptom.to_string(), weight);
        self
    }

    /// Weight of `symptom`, falling back to [`DEFAULT_WEIGHT`].
    pub fn weight(&self, symptom: &str) -> f64 {
        lookup_or(&self.weights, symptom, DEFAULT_WEIGHT)
    }

    /// Explicitly stored weight, `None` for unseen symptoms.
    pub fn get(&self, symptom: &str) -> Option<f64> {
        self.weights.get(symptom).copied()
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.weights.contains_key(symptom)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(String, f64)> for SymptomWeights {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self { weights: iter.into_iter().collect() }
    }
}

/// Derive a weight for every distinct symptom in the table.
///
/// A symptom repeated inside one condition counts once for that condition.
pub fn derive_symptom_weights(table: &ConditionTable) -> SymptomWeights {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for condition in table {
        for symptom in condition.symptom_set() {
            *counts.entry(symptom).or_insert(0) += 1;
        }
    }

    let weights: SymptomWeights = counts
        .into_iter()
        .map(|(symptom, count)| (symptom.to_string(), 1.0 / f64::from(count).sqrt()))
        .collect();

    debug!(symptoms = weights.len(), conditions = table.len(), "Derived symptom weights");
    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use symptomyx_common::reference::reference_table;

    #[test]
    fn test_unique_symptom_has_full_weight() {
        let table = ConditionTable::from_pairs(&[("A", &["x", "y"]), ("B", &["y", "z"])]).unwrap();
        let w = derive_symptom_weights(&table);
        assert_eq!(w.weight("x"), 1.0);
        assert_eq!(w.weight("z"), 1.0);
    }

    #[test]
    fn test_shared_symptom_is_inverse_sqrt() {
        let table = ConditionTable::from_pairs(&[("A", &["x", "y"]), ("B", &["y", "z"])]).unwrap();
        let w = derive_symptom_weights(&table);
        assert_eq!(w.weight("y"), 1.0 / 2f64.sqrt());
    }

    #[test]
    fn test_reference_table_cough() {
        // cough appears in Common Cold, Flu, Allergies, Pneumonia
        let w = derive_symptom_weights(&reference_table());
        assert_eq!(w.weight("cough"), 0.5);
        assert_eq!(w.weight("itchy eyes"), 1.0);
    }

    #[test]
    fn test_unseen_symptom_defaults() {
        let w = derive_symptom_weights(&reference_table());
        assert!(!w.contains("rash"));
        assert_eq!(w.get("rash"), None);
        assert_eq!(w.weight("rash"), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_duplicates_within_condition_count_once() {
        let table = ConditionTable::from_pairs(&[("A", &["x", "x"]), ("B", &["z"])]).unwrap();
        assert_eq!(derive_symptom_weights(&table).weight("x"), 1.0);
    }

    #[test]
    fn test_weight_non_increasing_in_frequency() {
        let table = ConditionTable::from_pairs(&[
            ("A", &["common", "medium", "rare"]),
            ("B", &["common", "medium"]),
            ("C", &["common"]),
        ])
        .unwrap();
        let w = derive_symptom_weights(&table);
        assert!(w.weight("rare") >= w.weight("medium"));
        assert!(w.weight("medium") >= w.weight("common"));
    }

    #[test]
    fn test_empty_table_has_no_weights() {
        assert!(derive_symptom_weights(&ConditionTable::default()).is_empty());
    }
}

//! Condition table: the label → symptom-list associations every ranking
//! is scored against.
//!
//! Tables can be loaded from TOML, YAML or JSON. All three formats share the
//! same shape, a `conditions` list of `{ label, symptoms }` records:
//!
//! ```toml
//! [[conditions]]
//! label = "Flu"
//! symptoms = ["fever", "body aches", "cough"]
//! ```
//!
//! Table order is significant: the ranking keeps it on exact score ties.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SymptomyxError};
use crate::symptom::normalise_symptom;

/// A single condition and the symptoms associated with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub label: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

impl Condition {
    pub fn new(label: impl Into<String>, symptoms: &[&str]) -> Self {
        Self {
            label: label.into(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Distinct symptoms of this condition, in sorted order.
    pub fn symptom_set(&self) -> BTreeSet<&str> {
        self.symptoms.iter().map(String::as_str).collect()
    }
}

/// On-disk representation shared by every supported format.
#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    #[serde(default)]
    conditions: Vec<Condition>,
}

/// Ordered, validated collection of conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConditionTable {
    conditions: Vec<Condition>,
}

impl ConditionTable {
    /// Build a table, normalising every symptom and rejecting empty or
    /// duplicate labels. Input order is preserved.
    pub fn new(conditions: Vec<Condition>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut normalised = Vec::with_capacity(conditions.len());

        for condition in conditions {
            let label = condition.label.trim().to_string();
            if label.is_empty() {
                return Err(SymptomyxError::EmptyLabel);
            }
            if !seen.insert(label.clone()) {
                return Err(SymptomyxError::DuplicateCondition(label));
            }
            let symptoms = condition
                .symptoms
                .iter()
                .map(|s| normalise_symptom(s))
                .filter(|s| !s.is_empty())
                .collect();
            normalised.push(Condition { label, symptoms });
        }

        Ok(Self { conditions: normalised })
    }

    /// Convenience constructor from `(label, symptoms)` pairs.
    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|(label, symptoms)| Condition::new(*label, symptoms))
                .collect(),
        )
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TableFile = toml::from_str(content)?;
        Self::new(file.conditions)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: TableFile = serde_yaml::from_str(content)?;
        Self::new(file.conditions)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: TableFile = serde_json::from_str(content)?;
        Self::new(file.conditions)
    }

    /// Load a table file, choosing the parser from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = std::fs::read_to_string(path)?;
        let table = match ext.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            _ => return Err(SymptomyxError::UnsupportedFormat(path.display().to_string())),
        };

        debug!(path = %path.display(), conditions = table.len(), "Loaded condition table");
        Ok(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.conditions.iter().map(|c| c.label.as_str())
    }

    /// True if any condition lists `symptom`.
    pub fn contains_symptom(&self, symptom: &str) -> bool {
        self.conditions
            .iter()
            .any(|c| c.symptoms.iter().any(|s| s == symptom))
    }
}

impl<'a> IntoIterator for &'a ConditionTable {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

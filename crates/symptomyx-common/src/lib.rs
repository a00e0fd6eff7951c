//! symptomyx-common — Shared types, errors, and table loading used across all Symptomyx crates.

pub mod error;
pub mod symptom;
pub mod condition;
pub mod reference;
pub mod lookup;

// Re-export commonly used types
pub use condition::{Condition, ConditionTable};
pub use error::{Result, SymptomyxError};
pub use lookup::lookup_or;
pub use symptom::{normalise_symptom, parse_symptom_line};

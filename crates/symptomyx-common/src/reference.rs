//! Built-in reference condition table.
//! Stand-in for a real condition database; used when no table file is configured.

use crate::condition::{Condition, ConditionTable};

/// The six-entry reference table, in its canonical order.
pub fn reference_table() -> ConditionTable {
    let conditions = vec![
        Condition::new("Common Cold", &["sore throat", "runny nose", "cough", "sneezing", "headache"]),
        Condition::new("Flu", &["fever", "body aches", "cough", "fatigue", "sore throat", "headache"]),
        Condition::new("Allergies", &["sneezing", "runny nose", "itchy eyes", "cough"]),
        Condition::new("Migraine", &["headache", "nausea", "sensitivity to light", "sensitivity to sound"]),
        Condition::new("Appendicitis", &["abdominal pain", "nausea", "vomiting", "fever"]),
        Condition::new("Pneumonia", &["cough", "fever", "chest pain", "shortness of breath", "fatigue"]),
    ];
    ConditionTable::new(conditions).expect("built-in reference table has unique, non-empty labels")
}

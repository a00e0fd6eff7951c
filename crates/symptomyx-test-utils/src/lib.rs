//! Shared fixtures and assertions for Symptomyx tests.

use symptomyx_common::ConditionTable;

pub use pretty_assertions::{assert_eq, assert_ne};
pub use symptomyx_common::reference::reference_table;

/// Tolerance used when comparing hand-computed scores.
pub const EPSILON: f64 = 1e-4;

/// `{A: [x, y], B: [y, z]}` — two conditions sharing one symptom.
pub fn shared_symptom_table() -> ConditionTable {
    ConditionTable::from_pairs(&[("A", &["x", "y"]), ("B", &["y", "z"])])
        .expect("fixture table is valid")
}

/// Three conditions with one symptom shared by all, one by two, one unique.
pub fn graded_frequency_table() -> ConditionTable {
    ConditionTable::from_pairs(&[
        ("Alpha", &["common", "medium", "rare"]),
        ("Beta", &["common", "medium"]),
        ("Gamma", &["common"]),
    ])
    .expect("fixture table is valid")
}

/// Assert two tables hold the same conditions in the same order.
#[track_caller]
pub fn assert_same_table(actual: &ConditionTable, expected: &ConditionTable) {
    assert_eq!(actual.conditions(), expected.conditions());
}

/// Assert two floats agree within [`EPSILON`].
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected} ± {EPSILON}, got {actual}"
    );
}

/// Assert a sequence is sorted descending.
#[track_caller]
pub fn assert_descending(values: &[f64]) {
    for pair in values.windows(2) {
        assert!(pair[0] >= pair[1], "not descending: {values:?}");
    }
}

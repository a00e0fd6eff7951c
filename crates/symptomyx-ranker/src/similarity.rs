//! Set-overlap similarity between a reported symptom set and a condition's
//! symptom set.
//!
//! Both inputs are treated as sets: duplicates collapse and order is
//! irrelevant. Sets are sorted so weight sums are accumulated in the same
//! order regardless of argument order, which keeps the weighted form exactly
//! symmetric.

use std::collections::BTreeSet;

use crate::weights::SymptomWeights;

fn to_set<S: AsRef<str>>(symptoms: &[S]) -> BTreeSet<&str> {
    symptoms.iter().map(AsRef::as_ref).collect()
}

/// Jaccard index |A ∩ B| / |A ∪ B|. Returns 0.0 when both sets are empty.
pub fn jaccard_similarity<A, B>(a: &[A], b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let a = to_set(a);
    let b = to_set(b);
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

/// Weighted Jaccard: Σw(A ∩ B) / Σw(A ∪ B), with unseen symptoms weighted 1.0.
/// Returns 0.0 when the weighted union is exactly zero.
pub fn weighted_similarity<A, B>(a: &[A], b: &[B], weights: &SymptomWeights) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let a = to_set(a);
    let b = to_set(b);

    // fold from +0.0: an empty f64 `sum()` yields -0.0, which would render as "-0.0000"
    let intersection = a.intersection(&b).fold(0.0, |acc, s| acc + weights.weight(s));
    let union = a.union(&b).fold(0.0, |acc, s| acc + weights.weight(s));

    if union == 0.0 {
        return 0.0;
    }
    intersection / union
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: [&str; 0] = [];

    #[test]
    fn test_jaccard_basic() {
        let s = jaccard_similarity(&["a", "b", "c"], &["b", "c", "d"]);
        assert_eq!(s, 0.5);
    }

    #[test]
    fn test_jaccard_empty_pair_is_zero() {
        assert_eq!(jaccard_similarity(&EMPTY, &EMPTY), 0.0);
    }

    #[test]
    fn test_jaccard_one_side_empty() {
        assert_eq!(jaccard_similarity(&["a"], &EMPTY), 0.0);
    }

    #[test]
    fn test_jaccard_identity() {
        assert_eq!(jaccard_similarity(&["fever", "cough"], &["cough", "fever"]), 1.0);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(
            jaccard_similarity(&["a", "a", "b"], &["b", "c"]),
            jaccard_similarity(&["a", "b"], &["c", "b"])
        );
    }

    #[test]
    fn test_weighted_example() {
        let weights = SymptomWeights::new()
            .with("x", 1.0)
            .with("y", 1.0 / 2f64.sqrt())
            .with("z", 1.0);
        let y = 1.0 / 2f64.sqrt();
        let s = weighted_similarity(&["y"], &["x", "y"], &weights);
        assert_eq!(s, y / (1.0 + y));
        assert!((s - 0.4142).abs() < 1e-4);
    }

    #[test]
    fn test_weighted_unseen_symptoms_weigh_one() {
        let weights = SymptomWeights::new().with("rare", 2.0);
        // intersection {rare} = 2.0, union {rare, other} = 2.0 + 1.0
        let s = weighted_similarity(&["rare", "other"], &["rare"], &weights);
        assert_eq!(s, 2.0 / 3.0);
    }

    #[test]
    fn test_weighted_disjoint_is_positive_zero() {
        let s = weighted_similarity(&["itchy eyes"], &["chest pain", "fever"], &SymptomWeights::new());
        assert_eq!(s, 0.0);
        assert!(!s.is_sign_negative());
    }

    #[test]
    fn test_weighted_empty_pair_is_zero() {
        assert_eq!(weighted_similarity(&EMPTY, &EMPTY, &SymptomWeights::new()), 0.0);
    }

    #[test]
    fn test_weighted_accepts_owned_strings() {
        let user = vec!["fever".to_string()];
        let condition = vec!["fever".to_string(), "cough".to_string()];
        assert_eq!(weighted_similarity(&user, &condition, &SymptomWeights::new()), 0.5);
    }
}

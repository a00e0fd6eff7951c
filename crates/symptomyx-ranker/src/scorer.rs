//! Condition ranking.
//!
//! For user symptoms U and each condition c:
//!
//!   L(c) = weighted_similarity(U, c)
//!   E    = Σ L(c)                       (shared across all conditions)
//!   P(c) = L(c) × prior(c) / E
//!
//! Results are sorted by P(c) descending; exact ties keep table order.

use serde::{Deserialize, Serialize};
use symptomyx_common::ConditionTable;
use tracing::debug;

use crate::bayes::posterior;
use crate::priors::{PriorMap, PriorSource};
use crate::similarity::weighted_similarity;
use crate::weights::{derive_symptom_weights, SymptomWeights};

/// One row of the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCondition {
    pub label: String,
    /// Weighted similarity, used directly as the likelihood.
    pub likelihood: f64,
    pub prior: f64,
    pub posterior: f64,
}

/// Rank every condition in `table` against the user's symptoms.
///
/// Total over its inputs: an empty table yields an empty ranking and an
/// empty symptom list yields all-zero posteriors.
pub fn diagnose<S: AsRef<str>>(
    user_symptoms: &[S],
    table: &ConditionTable,
    weights: &SymptomWeights,
    priors: &PriorMap,
) -> Vec<RankedCondition> {
    let likelihoods: Vec<f64> = table
        .iter()
        .map(|c| weighted_similarity(user_symptoms, c.symptoms.as_slice(), weights))
        .collect();

    let total_evidence = likelihoods.iter().fold(0.0, |acc, l| acc + l);

    let mut results: Vec<RankedCondition> = table
        .iter()
        .zip(likelihoods)
        .map(|(condition, likelihood)| {
            let prior = priors.prior(&condition.label);
            let score = posterior(prior, likelihood, total_evidence);
            debug!(
                condition = %condition.label,
                likelihood, prior, posterior = score,
                "Scored condition"
            );
            RankedCondition {
                label: condition.label.clone(),
                likelihood,
                prior,
                posterior: score,
            }
        })
        .collect();

    // sort_by is stable, so equal posteriors keep table order
    results.sort_by(|a, b| {
        b.posterior
            .partial_cmp(&a.posterior)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}

/// Derive weights from `table`, resolve priors from `source`, and rank.
pub fn rank<S, P>(user_symptoms: &[S], table: &ConditionTable, source: &mut P) -> Vec<RankedCondition>
where
    S: AsRef<str>,
    P: PriorSource + ?Sized,
{
    let weights = derive_symptom_weights(table);
    let priors = source.priors_for(table);
    diagnose(user_symptoms, table, &weights, &priors)
}

//! Bayes-shaped posterior combiner.
//!
//! `evidence` is the sum of every condition's raw likelihood rather than a
//! true marginal, so results are relative scores, not calibrated
//! probabilities. The formula is kept as-is because the ranking depends on it.

/// posterior = likelihood × prior / evidence; 0.0 when evidence is exactly 0.
pub fn posterior(prior: f64, likelihood: f64, evidence: f64) -> f64 {
    if evidence == 0.0 {
        return 0.0;
    }
    (likelihood * prior) / evidence
}

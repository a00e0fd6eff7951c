//! Prior probability sources.
//!
//! Priors are the only non-deterministic input to the ranking, so they are
//! supplied through the [`PriorSource`] trait and resolved into a
//! [`PriorMap`] before scoring. The scorer itself only ever sees the map.
//!
//! Implementations:
//! - [`UniformPrevalenceSampler`] — uniform random prevalence per condition
//! - [`FixedPriors`] — configured per-condition values
//! - any `FnMut(&str) -> Option<f64>` closure

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use symptomyx_common::{lookup_or, ConditionTable, Result, SymptomyxError};
use tracing::debug;

/// Prior used for any condition absent from the map.
pub const DEFAULT_PRIOR: f64 = 0.01;

/// Lower bound of the default sampling range.
pub const DEFAULT_MIN_PRIOR: f64 = 0.001;

/// Upper bound of the default sampling range.
pub const DEFAULT_MAX_PRIOR: f64 = 0.1;

/// Condition label → prior, with a fallback for unlisted labels
/// ([`DEFAULT_PRIOR`] unless overridden).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorMap {
    priors: HashMap<String, f64>,
    fallback: f64,
}

impl Default for PriorMap {
    fn default() -> Self {
        Self {
            priors: HashMap::new(),
            fallback: DEFAULT_PRIOR,
        }
    }
}

impl PriorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: &str, prior: f64) -> Self {
        self.priors.insert(label.to_string(), prior);
        self
    }

    /// Replace the prior used for unlisted labels.
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Prior for `label`, falling back to the map's fallback prior.
    pub fn prior(&self, label: &str) -> f64 {
        self.prior_or(label, self.fallback)
    }

    /// Prior for `label`, falling back to `default`.
    pub fn prior_or(&self, label: &str, default: f64) -> f64 {
        lookup_or(&self.priors, label, default)
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.priors.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.priors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priors.is_empty()
    }

    /// Reject any prior, fallback included, outside the open interval (0, 1).
    pub fn validate(&self) -> Result<()> {
        check_prior("<default>", self.fallback)?;
        for (label, &value) in &self.priors {
            check_prior(label, value)?;
        }
        Ok(())
    }
}

impl FromIterator<(String, f64)> for PriorMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            priors: iter.into_iter().collect(),
            fallback: DEFAULT_PRIOR,
        }
    }
}

fn check_prior(label: &str, value: f64) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(SymptomyxError::InvalidPrior { label: label.to_string(), value })
    }
}

/// Supplies a prior per condition label.
pub trait PriorSource {
    /// Prior for one condition. `None` leaves the condition on the default prior.
    fn prior_for(&mut self, label: &str) -> Option<f64>;

    /// Resolve priors for every condition in the table.
    fn priors_for(&mut self, table: &ConditionTable) -> PriorMap {
        table
            .labels()
            .filter_map(|label| self.prior_for(label).map(|p| (label.to_string(), p)))
            .collect()
    }
}

impl<F> PriorSource for F
where
    F: FnMut(&str) -> Option<f64>,
{
    fn prior_for(&mut self, label: &str) -> Option<f64> {
        self(label)
    }
}

// ── Uniform random prevalence ────────────────────────────────────────────────

/// Draws each condition's prior uniformly from `[min, max]`.
///
/// Unseeded samplers give different rankings on every run; use
/// [`UniformPrevalenceSampler::seeded`] for reproducible output.
#[derive(Debug, Clone)]
pub struct UniformPrevalenceSampler<R = StdRng> {
    rng: R,
    min: f64,
    max: f64,
}

impl UniformPrevalenceSampler<StdRng> {
    /// Entropy-seeded sampler over `[min, max]`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        Self::with_rng(StdRng::from_entropy(), min, max)
    }

    /// Deterministic sampler over `[min, max]`.
    pub fn seeded(min: f64, max: f64, seed: u64) -> Result<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed), min, max)
    }
}

impl<R: Rng> UniformPrevalenceSampler<R> {
    pub fn with_rng(rng: R, min: f64, max: f64) -> Result<Self> {
        if !(min > 0.0 && min <= max && max < 1.0) {
            return Err(SymptomyxError::Config(format!(
                "prior sampling range must satisfy 0 < min <= max < 1, got [{min}, {max}]"
            )));
        }
        Ok(Self { rng, min, max })
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl Default for UniformPrevalenceSampler<StdRng> {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            min: DEFAULT_MIN_PRIOR,
            max: DEFAULT_MAX_PRIOR,
        }
    }
}

impl<R: Rng> PriorSource for UniformPrevalenceSampler<R> {
    fn prior_for(&mut self, label: &str) -> Option<f64> {
        let prior = self.rng.gen_range(self.min..=self.max);
        debug!(condition = label, prior, "Sampled prior");
        Some(prior)
    }
}

// ── Fixed priors ─────────────────────────────────────────────────────────────

/// Configured per-condition priors. Unlisted conditions get the default.
#[derive(Debug, Clone, Default)]
pub struct FixedPriors {
    priors: PriorMap,
}

impl FixedPriors {
    pub fn new(priors: HashMap<String, f64>) -> Result<Self> {
        let priors: PriorMap = priors.into_iter().collect();
        priors.validate()?;
        Ok(Self { priors })
    }
}

impl PriorSource for FixedPriors {
    fn prior_for(&mut self, label: &str) -> Option<f64> {
        self.priors.get(label)
    }
}

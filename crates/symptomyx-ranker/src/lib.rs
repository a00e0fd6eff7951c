//! symptomyx-ranker — Condition ranking engine.
//!
//! Pipeline: condition table → symptom weights → per-condition weighted
//! similarity → shared-evidence posterior → descending ranking.

pub mod weights;
pub mod similarity;
pub mod bayes;
pub mod priors;
pub mod scorer;

pub use priors::{FixedPriors, PriorMap, PriorSource, UniformPrevalenceSampler, DEFAULT_PRIOR};
pub use scorer::{diagnose, RankedCondition};
pub use weights::{derive_symptom_weights, SymptomWeights, DEFAULT_WEIGHT};

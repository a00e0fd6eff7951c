//! Configuration loading for Symptomyx.
//! Reads symptomyx.toml from the current directory, or the path given by
//! `--config` / the SYMPTOMYX_CONFIG env var.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use symptomyx_ranker::priors::{DEFAULT_MAX_PRIOR, DEFAULT_MIN_PRIOR};
use symptomyx_ranker::DEFAULT_PRIOR;
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "symptomyx.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub priors: PriorsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    /// Condition table file; the built-in reference table is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorMode {
    #[default]
    Random,
    Fixed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorsConfig {
    #[serde(default)]
    pub mode: PriorMode,
    #[serde(default = "default_min_prior")]
    pub min: f64,
    #[serde(default = "default_max_prior")]
    pub max: f64,
    #[serde(default = "default_prior")]
    pub default_prior: f64,
    pub seed: Option<u64>,
    #[serde(default)]
    pub fixed: HashMap<String, f64>,
}

fn default_min_prior() -> f64 { DEFAULT_MIN_PRIOR }
fn default_max_prior() -> f64 { DEFAULT_MAX_PRIOR }
fn default_prior()     -> f64 { DEFAULT_PRIOR }

impl Default for PriorsConfig {
    fn default() -> Self {
        Self {
            mode: PriorMode::default(),
            min: default_min_prior(),
            max: default_max_prior(),
            default_prior: default_prior(),
            seed: None,
            fixed: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

fn default_top_n()     -> usize { 5 }
fn default_precision() -> usize { 4 }
fn default_disclaimer() -> String {
    "This is not a substitute for professional medical advice. \
     Consult a doctor for accurate diagnosis and treatment."
        .to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            precision: default_precision(),
            format: OutputFormat::default(),
            disclaimer: default_disclaimer(),
        }
    }
}

mod tests;

impl Config {
    /// Load configuration.
    ///
    /// An explicitly requested file must exist. When no path is given the
    /// default symptomyx.toml is read if present, otherwise built-in
    /// defaults are used.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    anyhow::bail!("Config file not found: {}", p.display());
                }
                p.to_path_buf()
            }
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    info!("No {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                    return Ok(Self::default());
                }
                p
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Check ranges that serde cannot express.
    pub fn validate(&self) -> anyhow::Result<()> {
        let p = &self.priors;
        if !(p.min > 0.0 && p.min <= p.max && p.max < 1.0) {
            anyhow::bail!(
                "priors.min/max must satisfy 0 < min <= max < 1, got [{}, {}]",
                p.min, p.max
            );
        }
        if !(p.default_prior > 0.0 && p.default_prior < 1.0) {
            anyhow::bail!("priors.default_prior must lie in (0, 1), got {}", p.default_prior);
        }
        for (label, &value) in &p.fixed {
            if !(value > 0.0 && value < 1.0) {
                anyhow::bail!("priors.fixed.{label} must lie in (0, 1), got {value}");
            }
        }
        if self.output.top_n == 0 {
            anyhow::bail!("output.top_n must be at least 1");
        }
        Ok(())
    }
}

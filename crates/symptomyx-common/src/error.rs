use thiserror::Error;

#[derive(Debug, Error)]
pub enum SymptomyxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported table format: {0} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("Duplicate condition label: {0}")]
    DuplicateCondition(String),

    #[error("Condition label must not be empty")]
    EmptyLabel,

    #[error("Prior for {label} must lie in (0, 1), got {value}")]
    InvalidPrior { label: String, value: f64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SymptomyxError>;

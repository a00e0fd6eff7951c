//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{Config, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "symptomyx",
    version,
    about = "Rank likely conditions for a set of reported symptoms"
)]
pub struct Args {
    /// Comma-separated symptoms. Prompts on stdin when omitted.
    #[arg(short, long)]
    pub symptoms: Option<String>,

    /// Config file (defaults to ./symptomyx.toml when present).
    #[arg(short, long, env = "SYMPTOMYX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Condition table file (.toml, .yaml, .yml or .json).
    #[arg(short, long)]
    pub table: Option<PathBuf>,

    /// Number of conditions to print.
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Seed for the random prior sampler.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the ranking as JSON.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref table) = self.table {
            config.table.path = Some(table.clone());
        }
        if let Some(top) = self.top {
            config.output.top_n = top;
        }
        if let Some(seed) = self.seed {
            config.priors.seed = Some(seed);
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "symptomyx=info,warn",
            _ => "symptomyx=debug,info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let args = Args::parse_from([
            "symptomyx", "--symptoms", "fever", "--top", "2", "--seed", "9", "--json",
            "--table", "t.yaml",
        ]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.output.top_n, 2);
        assert_eq!(config.priors.seed, Some(9));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.table.path, Some(PathBuf::from("t.yaml")));
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["symptomyx"]);
        let mut config = Config::default();
        config.output.top_n = 7;
        args.apply(&mut config);
        assert_eq!(config.output.top_n, 7);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Args::parse_from(["symptomyx"]).log_filter(), "warn");
        assert_eq!(Args::parse_from(["symptomyx", "-vv"]).log_filter(), "symptomyx=debug,info");
    }
}

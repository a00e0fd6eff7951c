//! Symptomyx — symptom-to-condition ranking.
//! Entry point for the command-line binary.

mod cli;
mod config;
mod report;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use symptomyx_common::reference::reference_table;
use symptomyx_common::{parse_symptom_line, ConditionTable};
use symptomyx_ranker::{
    derive_symptom_weights, diagnose, FixedPriors, PriorSource, UniformPrevalenceSampler,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, OutputFormat, PriorMode, PriorsConfig};

fn build_prior_source(cfg: &PriorsConfig) -> anyhow::Result<Box<dyn PriorSource>> {
    let source: Box<dyn PriorSource> = match cfg.mode {
        PriorMode::Random => match cfg.seed {
            Some(seed) => Box::new(UniformPrevalenceSampler::seeded(cfg.min, cfg.max, seed)?),
            None => Box::new(UniformPrevalenceSampler::new(cfg.min, cfg.max)?),
        },
        PriorMode::Fixed => Box::new(FixedPriors::new(cfg.fixed.clone())?),
    };
    Ok(source)
}

fn load_table(config: &Config) -> anyhow::Result<ConditionTable> {
    match config.table.path {
        Some(ref path) => ConditionTable::load(path)
            .with_context(|| format!("loading condition table {}", path.display())),
        None => Ok(reference_table()),
    }
}

/// Non-empty user symptoms that no condition in the table lists.
fn unknown_symptoms<'a>(symptoms: &'a [String], table: &ConditionTable) -> Vec<&'a str> {
    symptoms
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty() && !table.contains_symptom(s))
        .collect()
}

fn read_symptom_line() -> anyhow::Result<String> {
    print!("Enter your symptoms (comma-separated): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!("Symptomyx v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    let table = load_table(&config)?;
    info!("Condition table ready: {} conditions", table.len());

    let line = match args.symptoms {
        Some(ref s) => s.clone(),
        None => read_symptom_line()?,
    };
    let symptoms = parse_symptom_line(&line);
    for symptom in unknown_symptoms(&symptoms, &table) {
        warn!("Unknown symptom '{symptom}' (not listed for any condition)");
    }

    let weights = derive_symptom_weights(&table);
    let mut source = build_prior_source(&config.priors)?;
    let priors = source
        .priors_for(&table)
        .with_fallback(config.priors.default_prior);

    let ranking = diagnose(&symptoms, &table, &weights, &priors);

    let out = &config.output;
    match out.format {
        OutputFormat::Text => {
            print!("{}", report::render_text(&ranking, out.top_n, out.precision, &out.disclaimer));
        }
        OutputFormat::Json => {
            println!("{}", report::render_json(&symptoms, &ranking, out.top_n, &out.disclaimer)?);
        }
    }

    Ok(())
}

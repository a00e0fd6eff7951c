//! Console and JSON rendering of a ranking.

use serde::Serialize;
use symptomyx_ranker::RankedCondition;

/// Text report: header, top-N `label: score` lines, disclaimer.
pub fn render_text(
    ranking: &[RankedCondition],
    top_n: usize,
    precision: usize,
    disclaimer: &str,
) -> String {
    let mut out = String::from("\nPossible Diagnoses:\n");
    for entry in ranking.iter().take(top_n) {
        out.push_str(&format!("{}: {:.*}\n", entry.label, precision, entry.posterior));
    }
    out.push_str(&format!("\nDisclaimer: {disclaimer}\n"));
    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    symptoms: &'a [String],
    results: &'a [RankedCondition],
    disclaimer: &'a str,
}

/// JSON report with full score breakdown for the top-N entries.
pub fn render_json(
    symptoms: &[String],
    ranking: &[RankedCondition],
    top_n: usize,
    disclaimer: &str,
) -> serde_json::Result<String> {
    let report = JsonReport {
        symptoms,
        results: &ranking[..top_n.min(ranking.len())],
        disclaimer,
    };
    serde_json::to_string_pretty(&report)
}

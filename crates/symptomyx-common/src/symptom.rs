//! Symptom token normalisation.
//!
//! A symptom has no identity beyond its text, so every symptom that enters
//! the pipeline (from the user or from a condition table) goes through
//! [`normalise_symptom`] first.

/// Trim surrounding whitespace and lower-case.
pub fn normalise_symptom(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split a free-text, comma-separated symptom line into normalised tokens.
///
/// Empty tokens (from `"cough,"` or a blank line) are kept: they match no
/// condition but still count toward every weighted union.
pub fn parse_symptom_line(line: &str) -> Vec<String> {
    line.split(',').map(normalise_symptom).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalise_trims_and_lowercases() {
        assert_eq!(normalise_symptom("  Sore Throat \n"), "sore throat");
    }

    #[test]
    fn test_parse_line() {
        let parsed = parse_symptom_line("Fever, COUGH ,  body aches");
        assert_eq!(parsed, vec!["fever", "cough", "body aches"]);
    }

    #[test]
    fn test_parse_keeps_empty_tokens() {
        assert_eq!(parse_symptom_line(""), vec![""]);
        assert_eq!(parse_symptom_line(" , ,"), vec!["", "", ""]);
        assert_eq!(parse_symptom_line("nausea,,"), vec!["nausea", "", ""]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        // Set semantics are applied by the scorer, not the parser.
        assert_eq!(parse_symptom_line("cough, Cough"), vec!["cough", "cough"]);
    }
}

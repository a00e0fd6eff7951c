#[cfg(test)]
mod tests {
    use super::super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_behaviour() {
        let config = Config::default();
        assert_eq!(config.priors.mode, PriorMode::Random);
        assert_eq!(config.priors.default_prior, 0.01);
        assert_eq!(config.output.top_n, 5);
        assert_eq!(config.output.precision, 4);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.table.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.priors.min, default_min_prior());
        assert_eq!(config.priors.max, default_max_prior());
        assert!(config.output.disclaimer.starts_with("This is not a substitute"));
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml_str(
            r#"
            [priors]
            mode = "fixed"
            seed = 42

            [priors.fixed]
            "Flu" = 0.05

            [output]
            format = "json"
            top_n = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.priors.mode, PriorMode::Fixed);
        assert_eq!(config.priors.seed, Some(42));
        assert_eq!(config.priors.fixed.get("Flu"), Some(&0.05));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.top_n, 3);
        assert_eq!(config.output.precision, 4);
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let mut config = Config::default();
        config.priors.min = 0.5;
        config.priors.max = 0.1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.priors.fixed.insert("Flu".to_string(), 1.0);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.output.top_n = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_mode_is_parse_error() {
        assert!(Config::from_toml_str("[priors]\nmode = \"learned\"\n").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = Config::load(Some(Path::new("/nonexistent/symptomyx.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[table]\npath = \"data/conditions.toml\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.table.path, Some(PathBuf::from("data/conditions.toml")));
    }
}

    use super::*;

    fn valid_settings() -> Settings {
        Settings {
            api_key: Some("test-key".to_string()),
            provider: Some(AiProvider::Gemini),
            model: Some("gemini-1.5-flash".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.grouping_sensitivity, 2);
        assert!(settings.exclusion_patterns.is_empty());
        assert!(!settings.disable_notifications);
        assert!(!settings.debug_mode);
    }

    #[test]
    fn test_serde_default_sensitivity() {
        let settings: Settings = toml::from_str("api_key = \"k\"").unwrap();
        assert_eq!(settings.grouping_sensitivity, 2);
    }

    #[test]
    fn test_validate_ok() {
        let settings = valid_settings();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_api_key() {
        let mut settings = valid_settings();
        settings.api_key = None;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_validate_blank_api_key() {
        let mut settings = valid_settings();
        settings.api_key = Some("   ".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_missing_provider() {
        let mut settings = valid_settings();
        settings.provider = None;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("provider"));
    }

    #[test]
    fn test_validate_sensitivity_range() {
        let mut settings = valid_settings();
        settings.grouping_sensitivity = 0;
        assert!(settings.validate().is_err());
        settings.grouping_sensitivity = 11;
        assert!(settings.validate().is_err());
        settings.grouping_sensitivity = 10;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_prompt_placeholder() {
        let mut settings = valid_settings();
        settings.grouping_prompt = Some("group these: {tabs_placeholder}".to_string());
        assert!(settings.validate().is_ok());

        settings.grouping_prompt = Some("no placeholder here".to_string());
        assert!(settings.validate().is_err());

        settings.grouping_prompt =
            Some("{tabs_placeholder} twice {tabs_placeholder}".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_resolved_prompt_default() {
        let settings = valid_settings();
        assert_eq!(settings.resolved_prompt(), DEFAULT_GROUPING_PROMPT);
    }

    #[test]
    fn test_resolved_prompt_custom() {
        let mut settings = valid_settings();
        settings.grouping_prompt = Some("custom {tabs_placeholder}".to_string());
        assert_eq!(settings.resolved_prompt(), "custom {tabs_placeholder}");
    }

    #[test]
    fn test_default_prompt_has_one_placeholder() {
        assert_eq!(
            DEFAULT_GROUPING_PROMPT.matches(TABS_PLACEHOLDER).count(),
            1
        );
    }

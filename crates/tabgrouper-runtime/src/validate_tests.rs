    use super::*;
    use serde_json::json;

    fn validate_str(payload: &str) -> Result<Vec<Suggestion>, SuggestionError> {
        let value: Value = serde_json::from_str(payload).unwrap();
        validate_suggestions(&value)
    }

    #[test]
    fn test_valid_payload() {
        let suggestions = validate_str(
            r#"[{"name": "Work", "tabIds": [1, 2]}, {"name": "Misc", "tabIds": [3]}]"#,
        )
        .unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].name, "Work");
        assert_eq!(suggestions[0].tab_ids, vec![TabId(1), TabId(2)]);
        assert_eq!(suggestions[1].tab_ids, vec![TabId(3)]);
    }

    #[test]
    fn test_rejects_non_array() {
        assert_eq!(
            validate_str(r#""not an array""#).unwrap_err(),
            SuggestionError::NotAnArray
        );
    }

    #[test]
    fn test_rejects_missing_name() {
        assert_eq!(
            validate_str(r#"[{"tabIds": [1, 2]}]"#).unwrap_err(),
            SuggestionError::MissingName(0)
        );
    }

    #[test]
    fn test_rejects_empty_name() {
        assert_eq!(
            validate_str(r#"[{"name": "   ", "tabIds": [1]}]"#).unwrap_err(),
            SuggestionError::MissingName(0)
        );
    }

    #[test]
    fn test_rejects_missing_tab_ids() {
        assert_eq!(
            validate_str(r#"[{"name": "X"}]"#).unwrap_err(),
            SuggestionError::MissingTabIds("X".to_string())
        );
    }

    #[test]
    fn test_rejects_string_tab_id() {
        let err = validate_str(r#"[{"name": "X", "tabIds": ["1"]}]"#).unwrap_err();
        assert!(matches!(err, SuggestionError::NonIntegerTabId { .. }));
    }

    #[test]
    fn test_rejects_float_tab_id() {
        let err = validate_str(r#"[{"name": "X", "tabIds": [1.5]}]"#).unwrap_err();
        assert!(matches!(err, SuggestionError::NonIntegerTabId { .. }));
    }

    #[test]
    fn test_rejects_non_object_group() {
        assert_eq!(
            validate_str(r#"[42]"#).unwrap_err(),
            SuggestionError::NotAnObject(0)
        );
    }

    #[test]
    fn test_trims_group_name() {
        let suggestions = validate_str(r#"[{"name": "  Work  ", "tabIds": []}]"#).unwrap();
        assert_eq!(suggestions[0].name, "Work");
    }

    #[test]
    fn test_unwraps_groups_object() {
        let value = json!({"groups": [{"name": "X", "tabIds": [1]}]});
        let suggestions = validate_suggestions(&value).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "X");
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(validate_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_strip_fence_json_tag() {
        let text = "```json\n[{\"name\": \"X\", \"tabIds\": [1]}]\n```";
        assert_eq!(strip_code_fence(text), "[{\"name\": \"X\", \"tabIds\": [1]}]");
    }

    #[test]
    fn test_strip_fence_bare() {
        assert_eq!(strip_code_fence("```\n[]\n```"), "[]");
    }

    #[test]
    fn test_strip_fence_absent() {
        assert_eq!(strip_code_fence("  [] "), "[]");
    }

    #[test]
    fn test_strip_fence_unterminated_left_alone() {
        assert_eq!(strip_code_fence("```json\n[]"), "```json\n[]");
    }

    use super::*;

    #[test]
    fn test_request_from_prompt() {
        let request = ChatCompletionRequest::from_prompt("openai/gpt-4o-mini", "hello");
        assert_eq!(request.model, "openai/gpt-4o-mini");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_response_first_text() {
        let response: ChatCompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(response.first_text(), Some("first"));
    }

    #[test]
    fn test_response_with_null_content() {
        let response: ChatCompletionResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn test_model_listing() {
        let listing: ListModelsResponse = serde_json::from_value(serde_json::json!({
            "data": [{"id": "openai/gpt-4o-mini", "name": "GPT-4o Mini", "pricing": {}}]
        }))
        .unwrap();
        assert_eq!(listing.data[0].id, "openai/gpt-4o-mini");
        assert_eq!(listing.data[0].name.as_deref(), Some("GPT-4o Mini"));
    }

    #[test]
    fn test_error_envelope() {
        let error: OpenRouterError = serde_json::from_value(serde_json::json!({
            "error": {"message": "Invalid API key", "code": 401}
        }))
        .unwrap();
        assert_eq!(error.error.message, "Invalid API key");
    }

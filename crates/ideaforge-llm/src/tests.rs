/// Envelope parsing tests using response bodies captured from each API.
#[cfg(test)]
mod unit {
    use crate::types::{AnthropicResponse, LocalChatResponse, OpenAiChatResponse, Prompt};

    #[test]
    fn local_envelope_text() {
        let json = r#"{
            "model": "llama3",
            "created_at": "2024-07-01T10:00:00Z",
            "message": {"role": "assistant", "content": "hello"},
            "done": true
        }"#;
        let r: LocalChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.into_text().as_deref(), Some("hello"));
    }

    #[test]
    fn openai_envelope_null_content() {
        let json = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": null}, "finish_reason": "stop"}]
        }"#;
        let r: OpenAiChatResponse = serde_json::from_str(json).unwrap();
        assert!(r.into_text().is_none());
    }

    #[test]
    fn openai_envelope_first_choice_wins() {
        let json = r#"{"choices": [
            {"message": {"content": "first"}},
            {"message": {"content": "second"}}
        ]}"#;
        let r: OpenAiChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.into_text().as_deref(), Some("first"));
    }

    #[test]
    fn anthropic_envelope_skips_non_text_blocks() {
        let json = r#"{
            "type": "message",
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "answer"}
            ]
        }"#;
        let r: AnthropicResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.into_text().as_deref(), Some("answer"));
    }

    #[test]
    fn anthropic_envelope_without_content() {
        let r: AnthropicResponse = serde_json::from_str(r#"{"type":"message"}"#).unwrap();
        assert!(r.into_text().is_none());
    }

    #[test]
    fn prompt_builder() {
        let p = Prompt::new("x").with_system("s").expect_json().with_temperature(0.7);
        assert_eq!(p.system.as_deref(), Some("s"));
        assert!(p.json);
        assert_eq!(p.temperature, Some(0.7));
    }
}

use serde::{Deserialize, Serialize};

// ─── Prompt ───────────────────────────────────────────────────────────────

/// One single-turn generation request, independent of the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prompt {
    pub text: String,
    pub system: Option<String>,
    /// Ask the backend for JSON output where it supports a switch for it.
    pub json: bool,
    pub temperature: Option<f32>,
}

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    #[must_use]
    pub fn expect_json(mut self) -> Self {
        self.json = true;
        self
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

// ─── Local model server ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct LocalChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<LocalOptions>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LocalOptions {
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocalChatResponse {
    #[serde(default)]
    pub message: Option<LocalMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocalMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// `GET {base}/tags`
#[derive(Debug, Deserialize)]
pub(crate) struct LocalTags {
    #[serde(default)]
    pub models: Vec<LocalModel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocalModel {
    pub name: String,
}

// ─── OpenAI chat completions ──────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiChatResponse {
    #[serde(default)]
    pub choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiChoice {
    pub message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiMessage {
    #[serde(default)]
    pub content: Option<String>,
}

// ─── Anthropic messages ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct AnthropicRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<&'a str>,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnthropicResponse {
    #[serde(default)]
    pub content: Vec<AnthropicBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnthropicBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl LocalChatResponse {
    pub fn into_text(self) -> Option<String> {
        self.message.and_then(|m| m.content)
    }
}

impl OpenAiChatResponse {
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}

impl AnthropicResponse {
    /// Text of the first `text` content block.
    pub fn into_text(self) -> Option<String> {
        self.content
            .into_iter()
            .find(|b| b.kind == "text")
            .and_then(|b| b.text)
    }
}

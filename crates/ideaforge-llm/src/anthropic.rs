//! Anthropic Messages API.

use crate::error::ProviderError;
use crate::provider::{send_json, Generate, ProviderKind};
use crate::types::{AnthropicRequest, AnthropicResponse, ChatMessage, Prompt};
use crate::Result;

const KIND: ProviderKind = ProviderKind::Anthropic;

#[derive(Debug, Clone)]
pub struct AnthropicAdapter {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    version: String,
    max_tokens: u32,
}

impl AnthropicAdapter {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            version: "2023-06-01".to_string(),
            max_tokens: 4000,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Generate for AnthropicAdapter {
    async fn generate(&self, prompt: &Prompt) -> Result<String> {
        let body = AnthropicRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: prompt.system.as_deref(),
            messages: vec![ChatMessage { role: "user", content: &prompt.text }],
            temperature: prompt.temperature,
        };
        let request = self
            .http
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.version)
            .json(&body);
        let response: AnthropicResponse = send_json(KIND, request).await?;
        response
            .into_text()
            .ok_or_else(|| ProviderError::missing(KIND, "content[0].text"))
    }
}

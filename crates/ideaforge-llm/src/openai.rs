//! OpenAI-compatible `/chat/completions`.

use crate::error::ProviderError;
use crate::provider::{send_json, Generate, ProviderKind};
use crate::types::{ChatMessage, OpenAiChatRequest, OpenAiChatResponse, Prompt};
use crate::Result;

const KIND: ProviderKind = ProviderKind::OpenAi;

#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiAdapter {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Generate for OpenAiAdapter {
    async fn generate(&self, prompt: &Prompt) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = prompt.system.as_deref() {
            messages.push(ChatMessage { role: "system", content: system });
        }
        messages.push(ChatMessage { role: "user", content: &prompt.text });

        let body = OpenAiChatRequest {
            model: &self.model,
            messages,
            temperature: prompt.temperature,
        };
        let request = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body);
        let response: OpenAiChatResponse = send_json(KIND, request).await?;
        response
            .into_text()
            .ok_or_else(|| ProviderError::missing(KIND, "choices[0].message.content"))
    }
}

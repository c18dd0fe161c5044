//! Local model server speaking the Ollama `/api` dialect.

use crate::error::ProviderError;
use crate::provider::{send_json, Generate, ProviderKind};
use crate::types::{
    ChatMessage, LocalChatRequest, LocalChatResponse, LocalOptions, LocalTags, Prompt,
};
use crate::Result;

const KIND: ProviderKind = ProviderKind::Local;

#[derive(Debug, Clone)]
pub struct LocalAdapter {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl LocalAdapter {
    /// `base_url` already carries the `/api` prefix.
    pub fn new(http: reqwest::Client, base_url: &str, model: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/tags", self.base_url);
        let tags: LocalTags = send_json(KIND, self.http.get(url)).await?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}

impl Generate for LocalAdapter {
    async fn generate(&self, prompt: &Prompt) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = prompt.system.as_deref() {
            messages.push(ChatMessage { role: "system", content: system });
        }
        messages.push(ChatMessage { role: "user", content: &prompt.text });

        let body = LocalChatRequest {
            model: &self.model,
            messages,
            stream: false,
            format: prompt.json.then_some("json"),
            options: prompt.temperature.map(|temperature| LocalOptions { temperature }),
        };
        let url = format!("{}/chat", self.base_url);
        let response: LocalChatResponse = send_json(KIND, self.http.post(url).json(&body)).await?;
        response
            .into_text()
            .ok_or_else(|| ProviderError::missing(KIND, "message.content"))
    }
}

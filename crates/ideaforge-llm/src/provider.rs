use crate::anthropic::AnthropicAdapter;
use crate::error::ProviderError;
use crate::local::LocalAdapter;
use crate::openai::OpenAiAdapter;
use crate::types::Prompt;
use crate::Result;
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;

// ─── ProviderKind ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Local,
    OpenAi,
    Anthropic,
}

impl ProviderKind {
    /// `gpt-*` goes to OpenAI, `claude-*` to Anthropic, everything else is
    /// assumed to be served by the local model server.
    pub fn for_model(model_id: &str) -> Self {
        if model_id.starts_with("gpt-") {
            ProviderKind::OpenAi
        } else if model_id.starts_with("claude-") {
            ProviderKind::Anthropic
        } else {
            ProviderKind::Local
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Local => "local",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Generate ─────────────────────────────────────────────────────────────

/// A text-generation backend bound to one model.
pub trait Generate {
    fn generate(&self, prompt: &Prompt) -> impl Future<Output = Result<String>> + Send;
}

/// Adapter chosen for a model id. Resolved once per request by
/// [`ProviderRegistry::resolve`].
#[derive(Debug, Clone)]
pub enum Provider {
    Local(LocalAdapter),
    OpenAi(OpenAiAdapter),
    Anthropic(AnthropicAdapter),
}

impl Provider {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::Local(_) => ProviderKind::Local,
            Provider::OpenAi(_) => ProviderKind::OpenAi,
            Provider::Anthropic(_) => ProviderKind::Anthropic,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Provider::Local(a) => a.model(),
            Provider::OpenAi(a) => a.model(),
            Provider::Anthropic(a) => a.model(),
        }
    }
}

impl Generate for Provider {
    async fn generate(&self, prompt: &Prompt) -> Result<String> {
        tracing::info!(provider = %self.kind(), model = self.model(), "calling model");
        tracing::debug!(prompt = %prompt.text, "prompt");
        match self {
            Provider::Local(a) => a.generate(prompt).await,
            Provider::OpenAi(a) => a.generate(prompt).await,
            Provider::Anthropic(a) => a.generate(prompt).await,
        }
    }
}

// ─── ProviderRegistry ─────────────────────────────────────────────────────

/// Endpoints and credentials for every backend.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub local_base_url: Option<String>,
    pub openai_base_url: String,
    pub openai_api_key: Option<String>,
    pub anthropic_base_url: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_version: String,
    pub anthropic_max_tokens: u32,
}

/// Builds [`Provider`]s over one shared HTTP client. Holds no per-request
/// state.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    http: reqwest::Client,
    config: RegistryConfig,
}

impl ProviderRegistry {
    pub fn new(http: reqwest::Client, config: RegistryConfig) -> Self {
        Self { http, config }
    }

    pub fn resolve(&self, model_id: &str) -> Result<Provider> {
        let kind = ProviderKind::for_model(model_id);
        let c = &self.config;
        Ok(match kind {
            ProviderKind::Local => Provider::Local(self.local(model_id)?),
            ProviderKind::OpenAi => {
                let key = c
                    .openai_api_key
                    .as_deref()
                    .ok_or(ProviderError::NotConfigured(kind))?;
                Provider::OpenAi(OpenAiAdapter::new(
                    self.http.clone(),
                    &c.openai_base_url,
                    key,
                    model_id,
                ))
            }
            ProviderKind::Anthropic => {
                let key = c
                    .anthropic_api_key
                    .as_deref()
                    .ok_or(ProviderError::NotConfigured(kind))?;
                Provider::Anthropic(
                    AnthropicAdapter::new(self.http.clone(), &c.anthropic_base_url, key, model_id)
                        .with_version(&c.anthropic_version)
                        .with_max_tokens(c.anthropic_max_tokens),
                )
            }
        })
    }

    fn local(&self, model_id: &str) -> Result<LocalAdapter> {
        let base = self
            .config
            .local_base_url
            .as_deref()
            .ok_or(ProviderError::NotConfigured(ProviderKind::Local))?;
        Ok(LocalAdapter::new(self.http.clone(), base, model_id))
    }

    /// Model names installed on the local model server.
    pub async fn local_models(&self) -> Result<Vec<String>> {
        self.local("")?.list_models().await
    }
}

// ─── HTTP helper ──────────────────────────────────────────────────────────

/// Send `request`, fail on non-2xx with the upstream body, decode JSON.
pub(crate) async fn send_json<T: DeserializeOwned>(
    provider: ProviderKind,
    request: reqwest::RequestBuilder,
) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::transport(provider, &e))?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::RequestFailed {
            provider,
            status: Some(status.as_u16()),
            detail: body,
        });
    }
    response.json().await.map_err(|e| ProviderError::RequestFailed {
        provider,
        status: Some(status.as_u16()),
        detail: format!("invalid response body: {e}"),
    })
}

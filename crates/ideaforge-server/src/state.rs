use ideaforge_core::config::Config;
use ideaforge_core::jira::JiraClient;
use ideaforge_core::ForgeError;
use ideaforge_llm::{ProviderRegistry, RegistryConfig};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state passed to all route handlers.
///
/// Read-only after construction: handlers share the HTTP connection pool and
/// configuration but no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub providers: ProviderRegistry,
    jira: Option<JiraClient>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ideaforge/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.server.request_timeout_secs))
            .build()?;

        let providers = ProviderRegistry::new(
            http.clone(),
            RegistryConfig {
                local_base_url: config.local.base_url.clone(),
                openai_base_url: config.openai.base_url.clone(),
                openai_api_key: config.openai.api_key.clone(),
                anthropic_base_url: config.anthropic.base_url.clone(),
                anthropic_api_key: config.anthropic.api_key.clone(),
                anthropic_version: config.anthropic.version.clone(),
                anthropic_max_tokens: config.anthropic.max_tokens,
            },
        );

        // Missing Jira credentials only fail the Jira endpoints.
        let jira = JiraClient::from_config(http, &config.jira).ok();
        if jira.is_none() {
            tracing::warn!("Jira credentials not set; Jira endpoints will return errors");
        }

        Ok(Self {
            config: Arc::new(config),
            providers,
            jira,
        })
    }

    pub fn jira(&self) -> Result<&JiraClient, ForgeError> {
        self.jira.as_ref().ok_or(ForgeError::NotConfigured("Jira"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jira_is_optional() {
        let state = AppState::new(Config::default()).unwrap();
        assert!(matches!(
            state.jira().unwrap_err(),
            ForgeError::NotConfigured("Jira")
        ));
    }

    #[test]
    fn jira_client_built_from_credentials() {
        let mut config = Config::default();
        config.jira.base_url = Some("https://acme.atlassian.net".into());
        config.jira.email = Some("pm@acme.io".into());
        config.jira.api_token = Some("tok".into());
        let state = AppState::new(config).unwrap();
        assert!(state.jira().is_ok());
    }
}

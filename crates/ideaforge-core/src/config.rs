use crate::error::{ForgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// LocalConfig
// ---------------------------------------------------------------------------

/// Local model server (Ollama-style API). `base_url` includes the `/api`
/// prefix, e.g. `http://localhost:11434/api`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

// ---------------------------------------------------------------------------
// OpenAiConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default = "default_openai_base")]
    pub base_url: String,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Advertised by `GET /api/models` next to the local models.
    #[serde(default = "default_openai_models")]
    pub models: Vec<String>,
}

fn default_openai_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_models() -> Vec<String> {
    vec![
        "gpt-4o-mini".to_string(),
        "gpt-4o".to_string(),
        "gpt-4".to_string(),
    ]
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_openai_base(),
            api_key: None,
            models: default_openai_models(),
        }
    }
}

// ---------------------------------------------------------------------------
// AnthropicConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicConfig {
    #[serde(default = "default_anthropic_base")]
    pub base_url: String,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default = "default_anthropic_version")]
    pub version: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_architecture_model")]
    pub architecture_model: String,
    #[serde(default = "default_pseudocode_model")]
    pub pseudocode_model: String,
}

fn default_anthropic_base() -> String {
    "https://api.anthropic.com/v1".to_string()
}

fn default_anthropic_version() -> String {
    "2023-06-01".to_string()
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_architecture_model() -> String {
    "claude-3-5-sonnet-20240620".to_string()
}

fn default_pseudocode_model() -> String {
    "claude-3-haiku-20240307".to_string()
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            base_url: default_anthropic_base(),
            api_key: None,
            version: default_anthropic_version(),
            max_tokens: default_max_tokens(),
            architecture_model: default_architecture_model(),
            pseudocode_model: default_pseudocode_model(),
        }
    }
}

// ---------------------------------------------------------------------------
// JiraConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JiraConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing)]
    pub api_token: Option<String>,
}

impl JiraConfig {
    /// `(base_url, email, api_token)` when all three are set.
    pub fn credentials(&self) -> Option<(&str, &str, &str)> {
        Some((
            self.base_url.as_deref()?,
            self.email.as_deref()?,
            self.api_token.as_deref()?,
        ))
    }
}

// ---------------------------------------------------------------------------
// PlantUmlConfig / ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantUmlConfig {
    #[serde(default = "default_plantuml_server")]
    pub server: String,
}

fn default_plantuml_server() -> String {
    "http://www.plantuml.com/plantuml".to_string()
}

impl Default for PlantUmlConfig {
    fn default() -> Self {
        Self {
            server: default_plantuml_server(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Applied to every outbound request. There are no retries.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_port() -> u16 {
    5001
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub local: LocalConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub anthropic: AnthropicConfig,
    #[serde(default)]
    pub jira: JiraConfig,
    #[serde(default)]
    pub plantuml: PlantUmlConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Defaults, then the YAML file at `path` (if any), then the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_yaml(&std::fs::read_to_string(p)?)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Override fields from environment-style variables. Empty values are
    /// treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("OLLAMA_API_BASE") {
            self.local.base_url = Some(v);
        }
        if let Some(v) = get("OPENAI_API_BASE") {
            self.openai.base_url = v;
        }
        if let Some(v) = get("OPENAI_API_KEY") {
            self.openai.api_key = Some(v);
        }
        if let Some(v) = get("ANTHROPIC_API_BASE") {
            self.anthropic.base_url = v;
        }
        if let Some(v) = get("ANTHROPIC_API_KEY") {
            self.anthropic.api_key = Some(v);
        }
        if let Some(v) = get("JIRA_API_BASE") {
            self.jira.base_url = Some(v);
        }
        if let Some(v) = get("JIRA_EMAIL") {
            self.jira.email = Some(v);
        }
        if let Some(v) = get("JIRA_API_TOKEN") {
            self.jira.api_token = Some(v);
        }
        if let Some(v) = get("PLANTUML_SERVER") {
            self.plantuml.server = v;
        }
        if let Some(v) = get("IDEAFORGE_PORT") {
            self.server.port = v
                .trim()
                .parse()
                .map_err(|_| ForgeError::Config(format!("IDEAFORGE_PORT '{v}' is not a port")))?;
        }
        if let Some(v) = get("IDEAFORGE_TIMEOUT_SECS") {
            self.server.request_timeout_secs = v.trim().parse().map_err(|_| {
                ForgeError::Config(format!("IDEAFORGE_TIMEOUT_SECS '{v}' is not a number"))
            })?;
        }
        Ok(())
    }
}

//! `ideaforge-llm` — one text-generation call over three model APIs.
//!
//! The local model server, OpenAI chat completions and the Anthropic
//! Messages API differ in auth headers, request payload and response
//! envelope. This crate hides those differences behind [`Generate`].
//!
//! # Architecture
//!
//! ```text
//! model id ("gpt-4o", "claude-…", "llama3")
//!     │
//!     ▼
//! ProviderRegistry::resolve   ← picks ProviderKind from the id prefix,
//!     │                          checks credentials once
//!     ▼
//! Provider (enum)             ← Local | OpenAi | Anthropic adapter
//!     │
//!     ▼
//! Generate::generate(&Prompt) -> String
//! ```
//!
//! Failures never produce fallback text: every transport error, non-2xx
//! answer or envelope without text becomes [`ProviderError::RequestFailed`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ideaforge_llm::{Generate, Prompt, ProviderRegistry};
//!
//! let provider = registry.resolve("gpt-4o-mini")?;
//! let text = provider.generate(&Prompt::new("Say hello")).await?;
//! ```

pub mod anthropic;
pub mod error;
pub mod local;
pub mod openai;
pub mod provider;
pub mod types;

#[cfg(test)]
mod tests;

pub use anthropic::AnthropicAdapter;
pub use error::ProviderError;
pub use local::LocalAdapter;
pub use openai::OpenAiAdapter;
pub use provider::{Generate, Provider, ProviderKind, ProviderRegistry, RegistryConfig};
pub use types::Prompt;

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, ProviderError>;

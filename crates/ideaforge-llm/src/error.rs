use crate::provider::ProviderKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure, non-2xx answer or an envelope without the expected
    /// text. `status` is set whenever the upstream answered.
    #[error("{provider} request failed{}: {detail}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    RequestFailed {
        provider: ProviderKind,
        status: Option<u16>,
        detail: String,
    },

    #[error("{0} provider is not configured")]
    NotConfigured(ProviderKind),
}

impl ProviderError {
    pub(crate) fn transport(provider: ProviderKind, err: &reqwest::Error) -> Self {
        Self::RequestFailed {
            provider,
            status: err.status().map(|s| s.as_u16()),
            detail: err.to_string(),
        }
    }

    pub(crate) fn missing(provider: ProviderKind, field: &str) -> Self {
        Self::RequestFailed {
            provider,
            status: None,
            detail: format!("response is missing {field}"),
        }
    }

    /// Upstream HTTP status, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => *status,
            Self::NotConfigured(_) => None,
        }
    }
}

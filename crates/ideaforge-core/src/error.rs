use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("missing required field: {0}")]
    Validation(String),

    #[error("Invalid item type: {0}")]
    InvalidItemType(String),

    #[error("model returned malformed JSON: {reason}\n  raw: {raw}")]
    MalformedModelOutput { raw: String, reason: String },

    #[error("no Jira projects found")]
    NoJiraProjectAvailable,

    #[error("could not load Jira issue metadata for project {project}: {reason}")]
    JiraMetadataUnavailable { project: String, reason: String },

    #[error("no valid issue type found for {requested}. Available types are: {}", .available.join(", "))]
    UnknownIssueType {
        requested: String,
        available: Vec<String>,
    },

    #[error("Jira rejected the request (HTTP {status}): {body}")]
    JiraIssueRejected { status: u16, body: String },

    #[error("Jira request failed: {0}")]
    JiraTransport(String),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ForgeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_issue_type_lists_available() {
        let err = ForgeError::UnknownIssueType {
            requested: "bug".into(),
            available: vec!["epic".into(), "story".into()],
        };
        assert_eq!(
            err.to_string(),
            "no valid issue type found for bug. Available types are: epic, story"
        );
    }

    #[test]
    fn malformed_output_keeps_raw_text() {
        let err = ForgeError::MalformedModelOutput {
            raw: "not json".into(),
            reason: "expected value".into(),
        };
        assert!(err.to_string().contains("raw: not json"));
    }
}

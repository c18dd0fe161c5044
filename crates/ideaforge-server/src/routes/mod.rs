pub mod architecture;
pub mod code;
pub mod jira;
pub mod models;
pub mod requirements;
pub mod rewrite;

use ideaforge_core::ForgeError;

/// A present, non-blank string field.
pub(crate) fn required(value: Option<String>, field: &str) -> Result<String, ForgeError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ForgeError::validation(field)),
    }
}

/// A present, non-null JSON field.
pub(crate) fn required_value(
    value: Option<serde_json::Value>,
    field: &str,
) -> Result<serde_json::Value, ForgeError> {
    match value {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(ForgeError::validation(field)),
    }
}

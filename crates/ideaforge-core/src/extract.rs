//! Parsing of model replies that are supposed to be JSON.
//!
//! Two stages only: a strict parse of the raw text, then a strict parse of the
//! text with its surrounding markdown code fence removed. Nothing else is
//! repaired.

use crate::error::{ForgeError, Result};
use regex::Regex;
use std::sync::OnceLock;

static OPEN_FENCE_RE: OnceLock<Regex> = OnceLock::new();
static CLOSE_FENCE_RE: OnceLock<Regex> = OnceLock::new();

fn open_fence() -> &'static Regex {
    OPEN_FENCE_RE.get_or_init(|| Regex::new(r"^\s*```[A-Za-z]*[ \t]*\r?\n?").unwrap())
}

fn close_fence() -> &'static Regex {
    CLOSE_FENCE_RE.get_or_init(|| Regex::new(r"\r?\n?[ \t]*```\s*$").unwrap())
}

/// Remove one leading and one trailing code-fence marker plus surrounding
/// whitespace. Text without fences is only trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let start = open_fence().find(text).map_or(0, |m| m.end());
    let body = &text[start..];
    let end = close_fence().find(body).map_or(body.len(), |m| m.start());
    body[..end].trim()
}

/// Parse a model reply into JSON, tolerating a ```` ```json ```` wrapper.
pub fn parse_model_json(text: &str) -> Result<serde_json::Value> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(first) => {
            tracing::debug!(
                error = %first,
                "strict JSON parse failed, retrying without code fence"
            );
            serde_json::from_str(strip_code_fence(text)).map_err(|second| {
                ForgeError::MalformedModelOutput {
                    raw: text.to_string(),
                    reason: second.to_string(),
                }
            })
        }
    }
}

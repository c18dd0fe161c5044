use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
///
/// Every failure renders as HTTP 500 with `{ "error", "details" }`. Handlers
/// attach a one-line summary with `anyhow::Context`; the summary becomes
/// `error` and the underlying cause chain becomes `details`. Clients branch
/// on the text, not on the status.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{:#}", self.0);

        let details: Vec<String> = self.0.chain().skip(1).map(ToString::to_string).collect();
        let body = if details.is_empty() {
            serde_json::json!({ "error": self.0.to_string() })
        } else {
            serde_json::json!({ "error": self.0.to_string(), "details": details.join(": ") })
        };
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

/// The single-page UI: `index.html`, `app.js`, `style.css`.
#[derive(Embed)]
#[folder = "$CARGO_MANIFEST_DIR/frontend/"]
struct Ui;

const INDEX: &str = "index.html";

/// Router fallback. Known asset paths are served as-is, `/api/*` misses are
/// 404, and every other path gets the UI shell.
pub async fn static_handler(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if path.starts_with("api/") {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    }

    let name = if path.is_empty() || Ui::get(path).is_none() {
        INDEX
    } else {
        path
    };
    asset(name)
}

fn asset(name: &str) -> Response {
    let Some(file) = Ui::get(name) else {
        return (StatusCode::NOT_FOUND, "UI assets missing from build").into_response();
    };

    let mime = if name == INDEX {
        "text/html".to_string()
    } else {
        mime_guess::from_path(name).first_or_octet_stream().to_string()
    };
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime),
            // Assets are not fingerprinted; always revalidate.
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        file.data.into_owned(),
    )
        .into_response()
}

//! HTTP API and embedded web UI.
//!
//! Every handler is stateless: it validates its request, calls one provider
//! or Jira, reshapes the answer and returns it. Failures of any kind come back
//! as HTTP 500 with `{error, details}` (see [`error::AppError`]).

pub mod embed;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use ideaforge_core::config::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Models
        .route("/api/models", get(routes::models::list_models))
        // Generation
        .route(
            "/api/generate-requirements",
            get(routes::requirements::generate_requirements),
        )
        .route("/api/generate-code", post(routes::code::generate_code))
        .route(
            "/api/generate-full-code",
            post(routes::code::generate_full_code),
        )
        .route(
            "/api/generate-architecture",
            post(routes::architecture::generate_architecture),
        )
        .route(
            "/api/generate-pseudocode",
            post(routes::architecture::generate_pseudocode),
        )
        .route("/api/rewrite-item", post(routes::rewrite::rewrite_item))
        // Jira
        .route("/api/jira-projects", get(routes::jira::list_projects))
        .route("/api/submit-to-jira", post(routes::jira::submit_to_jira))
        .fallback(embed::static_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the server on `config.server.port`.
pub async fn serve(config: Config, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(config, listener, open_browser).await
}

/// Serve on an already bound listener; the logged URL uses its real port.
pub async fn serve_on(
    config: Config,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(AppState::new(config)?);

    tracing::info!("IdeaForge listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

use anyhow::Context;
use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// Local model names followed by the configured OpenAI ids.
pub async fn available_models(app: &AppState) -> anyhow::Result<Vec<String>> {
    let mut models = app
        .providers
        .local_models()
        .await
        .context("Failed to fetch models")?;
    models.extend(app.config.openai.models.iter().cloned());
    Ok(models)
}

/// GET /api/models
pub async fn list_models(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let models = available_models(&app).await?;
    Ok(Json(serde_json::json!({ "models": models })))
}

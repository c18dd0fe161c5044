use anyhow::Context;
use axum::extract::State;
use axum::Json;
use ideaforge_core::extract::parse_model_json;
use ideaforge_core::prompts;
use ideaforge_core::types::Requirements;
use ideaforge_llm::{Generate, Prompt};

use super::required;
use crate::error::AppError;
use crate::extract::ApiQuery;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct RequirementsQuery {
    #[serde(default)]
    pub idea: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Epics, tasks and stories for `idea`, exactly as the model returned them.
pub async fn requirements_for(
    app: &AppState,
    idea: &str,
    model: &str,
) -> anyhow::Result<serde_json::Value> {
    let result = async {
        let provider = app.providers.resolve(model)?;
        let prompt = Prompt::new(prompts::requirements(idea))
            .with_system(prompts::REQUIREMENTS_SYSTEM)
            .expect_json();
        let text = provider.generate(&prompt).await?;
        let value = parse_model_json(&text)?;
        report_consistency(&value);
        Ok::<_, anyhow::Error>(value)
    }
    .await
    .context("Failed to generate requirements")?;

    Ok(result)
}

/// GET /api/generate-requirements?idea=&model=
pub async fn generate_requirements(
    State(app): State<AppState>,
    ApiQuery(query): ApiQuery<RequirementsQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    const FAILED: &str = "Failed to generate requirements";
    let idea = required(query.idea, "idea").context(FAILED)?;
    let model = required(query.model, "model").context(FAILED)?;

    Ok(Json(requirements_for(&app, &idea, &model).await?))
}

/// Log structural problems in the model output. The output itself is never
/// altered.
fn report_consistency(value: &serde_json::Value) {
    match serde_json::from_value::<Requirements>(value.clone()) {
        Ok(requirements) => {
            for warning in requirements.consistency_warnings() {
                tracing::warn!("{warning}");
            }
        }
        Err(e) => tracing::warn!("requirements do not match the epic/task/story shape: {e}"),
    }
}

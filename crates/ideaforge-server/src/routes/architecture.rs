use anyhow::Context;
use axum::extract::State;
use axum::Json;
use ideaforge_core::{plantuml, prompts};
use ideaforge_llm::{Generate, Prompt};

use super::required_value;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Backlog sent for architecture and pseudocode generation. `model`
/// overrides the configured default for the endpoint.
#[derive(serde::Deserialize)]
pub struct BacklogBody {
    #[serde(default)]
    pub epics: Option<serde_json::Value>,
    #[serde(default)]
    pub tasks: Option<serde_json::Value>,
    #[serde(default)]
    pub stories: Option<serde_json::Value>,
    #[serde(default)]
    pub model: Option<String>,
}

struct Backlog {
    epics: serde_json::Value,
    tasks: serde_json::Value,
    stories: serde_json::Value,
    model: Option<String>,
}

impl TryFrom<BacklogBody> for Backlog {
    type Error = ideaforge_core::ForgeError;

    fn try_from(body: BacklogBody) -> Result<Self, Self::Error> {
        let empty = || serde_json::json!([]);
        Ok(Self {
            epics: required_value(body.epics, "epics")?,
            tasks: body.tasks.unwrap_or_else(empty),
            stories: body.stories.unwrap_or_else(empty),
            model: body.model.filter(|m| !m.trim().is_empty()),
        })
    }
}

/// POST /api/generate-architecture — sanitized PlantUML plus its rendering URL.
pub async fn generate_architecture(
    State(app): State<AppState>,
    ApiJson(body): ApiJson<BacklogBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let architecture = async {
        let backlog = Backlog::try_from(body)?;
        let model = backlog
            .model
            .unwrap_or_else(|| app.config.anthropic.architecture_model.clone());

        let provider = app.providers.resolve(&model)?;
        let prompt = Prompt::new(prompts::architecture(
            &backlog.epics,
            &backlog.tasks,
            &backlog.stories,
        ));
        let raw = provider.generate(&prompt).await?;
        Ok::<_, anyhow::Error>(plantuml::sanitize(&raw))
    }
    .await
    .context("Failed to generate architecture")?;

    let image_url = plantuml::image_url(&app.config.plantuml.server, &architecture);
    Ok(Json(serde_json::json!({
        "architecture": architecture,
        "imageUrl": image_url,
    })))
}

/// POST /api/generate-pseudocode — pseudocode for the core flows.
pub async fn generate_pseudocode(
    State(app): State<AppState>,
    ApiJson(body): ApiJson<BacklogBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let pseudocode = async {
        let backlog = Backlog::try_from(body)?;
        let model = backlog
            .model
            .unwrap_or_else(|| app.config.anthropic.pseudocode_model.clone());

        let provider = app.providers.resolve(&model)?;
        let prompt = Prompt::new(prompts::pseudocode(
            &backlog.epics,
            &backlog.tasks,
            &backlog.stories,
        ));
        Ok::<_, anyhow::Error>(provider.generate(&prompt).await?)
    }
    .await
    .context("Failed to generate pseudocode")?;

    Ok(Json(serde_json::json!({ "pseudocode": pseudocode })))
}

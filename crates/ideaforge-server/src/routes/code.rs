use anyhow::Context;
use axum::extract::State;
use axum::Json;
use ideaforge_core::{prompts, ForgeError};
use ideaforge_llm::{Generate, Prompt};

use super::{required, required_value};
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

const CODE_TEMPERATURE: f32 = 0.7;

#[derive(serde::Deserialize)]
pub struct StoryBrief {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
}

#[derive(serde::Deserialize)]
pub struct GenerateCodeBody {
    #[serde(default)]
    pub story: Option<StoryBrief>,
    #[serde(default)]
    pub model: Option<String>,
}

/// POST /api/generate-code — a code snippet implementing one story.
pub async fn generate_code(
    State(app): State<AppState>,
    ApiJson(body): ApiJson<GenerateCodeBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let code = async {
        let story = body.story.ok_or_else(|| ForgeError::validation("story"))?;
        let model = required(body.model, "model")?;

        let provider = app.providers.resolve(&model)?;
        let prompt = Prompt::new(prompts::story_code(&story.summary, &story.description))
            .with_temperature(CODE_TEMPERATURE);
        Ok::<_, anyhow::Error>(provider.generate(&prompt).await?)
    }
    .await
    .context("Failed to generate code")?;

    Ok(Json(serde_json::json!({ "code": code })))
}

/// The UI posts `{epics, stories}`; other clients use the documented names.
#[derive(serde::Deserialize)]
pub struct FullCodeBody {
    #[serde(default, alias = "epics")]
    pub requirements: Option<serde_json::Value>,
    #[serde(default, rename = "userStories", alias = "stories")]
    pub user_stories: Option<serde_json::Value>,
    #[serde(default)]
    pub model: Option<String>,
}

/// POST /api/generate-full-code — a project skeleton for the whole backlog.
pub async fn generate_full_code(
    State(app): State<AppState>,
    ApiJson(body): ApiJson<FullCodeBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let code = async {
        let requirements = required_value(body.requirements, "requirements")?;
        let user_stories = body.user_stories.unwrap_or_else(|| serde_json::json!([]));
        let model = required(body.model, "model")?;

        let provider = app.providers.resolve(&model)?;
        let prompt = Prompt::new(prompts::full_code(&requirements, &user_stories))
            .with_temperature(CODE_TEMPERATURE);
        Ok::<_, anyhow::Error>(provider.generate(&prompt).await?)
    }
    .await
    .context("Failed to generate full code")?;

    Ok(Json(serde_json::json!({ "code": code })))
}

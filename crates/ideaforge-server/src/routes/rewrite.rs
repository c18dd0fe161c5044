use anyhow::Context;
use axum::extract::State;
use axum::Json;
use ideaforge_core::extract::parse_model_json;
use ideaforge_core::prompts;
use ideaforge_llm::{Generate, Prompt};

use super::{required, required_value};
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteBody {
    #[serde(default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub item: Option<serde_json::Value>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// POST /api/rewrite-item — the item regenerated from user feedback, in the
/// same JSON shape it was sent in.
pub async fn rewrite_item(
    State(app): State<AppState>,
    ApiJson(body): ApiJson<RewriteBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let rewritten = async {
        let item_type = required(body.item_type, "itemType")?;
        let item = required_value(body.item, "item")?;
        let feedback = required(body.feedback, "feedback")?;
        let model = required(body.model, "model")?;

        let provider = app.providers.resolve(&model)?;
        let prompt = Prompt::new(prompts::rewrite(&item_type, &item, &feedback))
            .expect_json()
            .with_temperature(0.7);
        let text = provider.generate(&prompt).await?;
        Ok::<_, anyhow::Error>(parse_model_json(&text)?)
    }
    .await
    .context("Failed to rewrite item")?;

    Ok(Json(rewritten))
}

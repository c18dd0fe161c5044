use anyhow::Context;
use axum::extract::State;
use axum::Json;
use ideaforge_core::jira::{self, SubmittedItem};
use ideaforge_core::types::ItemType;
use ideaforge_core::ForgeError;

use super::required;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// GET /api/jira-projects — `[{id, key, name}]` for every visible project.
pub async fn list_projects(
    State(app): State<AppState>,
) -> Result<Json<Vec<jira::JiraProject>>, AppError> {
    let projects = async { app.jira()?.list_projects().await }
        .await
        .context("Failed to fetch Jira projects")?;

    Ok(Json(projects))
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBody {
    #[serde(default)]
    pub project_key: Option<String>,
    #[serde(default)]
    pub item: Option<SubmittedItem>,
    #[serde(default)]
    pub item_type: Option<String>,
}

/// POST /api/submit-to-jira — create one Epic, Task or Story. Without a
/// `projectKey` the first project Jira lists is used.
pub async fn submit_to_jira(
    State(app): State<AppState>,
    ApiJson(body): ApiJson<SubmitBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let created = async {
        let item = body.item.ok_or_else(|| ForgeError::validation("item"))?;
        let item_type: ItemType = required(body.item_type, "itemType")?.parse()?;
        let project_key = body.project_key.filter(|k| !k.trim().is_empty());

        let client = app.jira()?;
        Ok::<_, anyhow::Error>(
            jira::submit_item(client, project_key.as_deref(), item, item_type).await?,
        )
    }
    .await
    .context("Failed to submit to Jira")?;

    Ok(Json(serde_json::json!({
        "message": "Successfully created issue in Jira",
        "createdIssue": created,
    })))
}

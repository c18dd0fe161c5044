use super::client::JiraClient;
use super::fields::{IssueTypeFields, ProjectFieldMap};
use super::payload::{build_issue_payload, IssueDraft};
use crate::error::{ForgeError, Result};
use crate::types::ItemType;
use serde::Deserialize;

/// An Epic, Task or Story as posted by the UI. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedItem {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub epic_id: Option<String>,
    #[serde(default)]
    pub acceptance_criteria: Option<String>,
}

impl SubmittedItem {
    /// Epics carry neither an epic reference nor acceptance criteria; stories
    /// carry only the epic reference.
    pub fn into_draft(self, item_type: ItemType) -> IssueDraft {
        let (epic_key, acceptance_criteria) = match item_type {
            ItemType::Epic => (None, None),
            ItemType::Task => (self.epic_id, self.acceptance_criteria),
            ItemType::Story => (self.epic_id, None),
        };
        IssueDraft {
            issue_type: item_type.issue_type_name().to_string(),
            summary: self.summary,
            description: self.description,
            epic_key,
            acceptance_criteria,
        }
    }
}

/// The requested key, or the first project visible to the configured user.
pub async fn resolve_project_key(client: &JiraClient, requested: Option<&str>) -> Result<String> {
    if let Some(key) = requested.map(str::trim).filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }
    let projects = client.list_projects().await?;
    let first = projects
        .into_iter()
        .next()
        .ok_or(ForgeError::NoJiraProjectAvailable)?;
    tracing::info!(project = %first.key, "no project key provided, using default");
    Ok(first.key)
}

/// Fetch every createmeta issue type of `project_key` with its field schema.
/// No caching: each call hits Jira once per issue type plus once for the list.
pub async fn fetch_field_map(client: &JiraClient, project_key: &str) -> Result<ProjectFieldMap> {
    let unavailable = |e: ForgeError| ForgeError::JiraMetadataUnavailable {
        project: project_key.to_string(),
        reason: e.to_string(),
    };

    let issue_types = client.issue_types(project_key).await.map_err(unavailable)?;
    let mut map = ProjectFieldMap::new();
    for issue_type in issue_types {
        let fields = client
            .issue_type_fields(&issue_type.id)
            .await
            .map_err(unavailable)?;
        map.insert(&issue_type.name, IssueTypeFields::new(issue_type.id, fields));
    }
    tracing::debug!(project = project_key, types = ?map.names(), "resolved issue types");
    Ok(map)
}

/// Resolve field ids for `draft.issue_type` and create the issue. Returns
/// Jira's response body (`id`, `key`, `self`).
pub async fn create_issue(
    client: &JiraClient,
    project_key: &str,
    draft: &IssueDraft,
) -> Result<serde_json::Value> {
    tracing::info!(project = project_key, issue_type = %draft.issue_type, "creating Jira issue");
    let field_map = fetch_field_map(client, project_key).await?;
    let issue_type = field_map.resolve(&draft.issue_type)?;
    let payload = build_issue_payload(project_key, issue_type, draft);
    tracing::debug!(payload = %payload, "sending Jira create request");

    let created = client.create_issue(&payload).await?;
    let key = created.get("key").and_then(|k| k.as_str()).unwrap_or("?");
    tracing::info!(issue = %key, "created Jira issue");
    Ok(created)
}

/// Full submission flow for one item: default project, draft, create.
pub async fn submit_item(
    client: &JiraClient,
    project_key: Option<&str>,
    item: SubmittedItem,
    item_type: ItemType,
) -> Result<serde_json::Value> {
    if item.summary.trim().is_empty() {
        return Err(ForgeError::validation("item.summary"));
    }
    let project_key = resolve_project_key(client, project_key).await?;
    let draft = item.into_draft(item_type);
    create_issue(client, &project_key, &draft).await
}

use crate::config::JiraConfig;
use crate::error::{ForgeError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraProject {
    pub id: String,
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueTypeRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct CreateMetaIssueTypes {
    /// Older instances answer `issueTypes`, paginated ones `values`.
    #[serde(default, rename = "issueTypes", alias = "values")]
    issue_types: Vec<IssueTypeRef>,
}

/// One entry of an issue type's field schema. Only the display name is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldListEntry {
    field_id: String,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldsPayload {
    Map(BTreeMap<String, FieldSchema>),
    List(Vec<FieldListEntry>),
}

#[derive(Debug, Deserialize)]
struct IssueTypeDetail {
    #[serde(default)]
    fields: Option<FieldsPayload>,
}

// ---------------------------------------------------------------------------
// JiraClient
// ---------------------------------------------------------------------------

/// Thin async wrapper over the Jira Cloud REST API v3 with basic auth.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl JiraClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        email: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            email: email.into(),
            api_token: api_token.into(),
        }
    }

    pub fn from_config(http: reqwest::Client, config: &JiraConfig) -> Result<Self> {
        let (base_url, email, token) = config
            .credentials()
            .ok_or(ForgeError::NotConfigured("Jira"))?;
        Ok(Self::new(http, base_url, email, token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "GET Jira");
        let response = self
            .http
            .get(self.url(path))
            .basic_auth(&self.email, Some(&self.api_token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ForgeError::JiraTransport(format!("GET {path}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForgeError::JiraTransport(format!(
                "GET {path} returned HTTP {}: {body}",
                status.as_u16()
            )));
        }
        response
            .json()
            .await
            .map_err(|e| ForgeError::JiraTransport(format!("GET {path}: invalid body: {e}")))
    }

    /// `GET /rest/api/3/project`
    pub async fn list_projects(&self) -> Result<Vec<JiraProject>> {
        self.get_json("/rest/api/3/project").await
    }

    /// `GET /rest/api/3/issue/createmeta/{project}/issuetypes`
    pub async fn issue_types(&self, project_key: &str) -> Result<Vec<IssueTypeRef>> {
        let meta: CreateMetaIssueTypes = self
            .get_json(&format!("/rest/api/3/issue/createmeta/{project_key}/issuetypes"))
            .await?;
        Ok(meta.issue_types)
    }

    /// `GET /rest/api/3/issuetype/{id}`, keyed by field id. An issue type
    /// without a `fields` member yields an empty map.
    pub async fn issue_type_fields(
        &self,
        issue_type_id: &str,
    ) -> Result<BTreeMap<String, FieldSchema>> {
        let detail: IssueTypeDetail = self
            .get_json(&format!("/rest/api/3/issuetype/{issue_type_id}"))
            .await?;
        Ok(match detail.fields {
            None => BTreeMap::new(),
            Some(FieldsPayload::Map(map)) => map,
            Some(FieldsPayload::List(list)) => list
                .into_iter()
                .map(|f| (f.field_id, FieldSchema { name: f.name }))
                .collect(),
        })
    }

    /// `POST /rest/api/3/issue`. Any non-2xx answer is returned verbatim as
    /// [`ForgeError::JiraIssueRejected`].
    pub async fn create_issue(&self, payload: &serde_json::Value) -> Result<serde_json::Value> {
        let response = self
            .http
            .post(self.url("/rest/api/3/issue"))
            .basic_auth(&self.email, Some(&self.api_token))
            .json(payload)
            .send()
            .await
            .map_err(|e| ForgeError::JiraTransport(format!("POST /rest/api/3/issue: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ForgeError::JiraTransport(format!("POST /rest/api/3/issue: {e}")))?;
        if !status.is_success() {
            return Err(ForgeError::JiraIssueRejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

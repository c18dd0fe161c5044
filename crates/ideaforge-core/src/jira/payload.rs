use super::fields::{IssueTypeFields, ACCEPTANCE_CRITERIA_FIELD, EPIC_LINK_FIELD};
use serde_json::{json, Map, Value};

/// Jira's rich-text format: a document holding a single text paragraph.
pub fn adf_paragraph(text: &str) -> Value {
    json!({
        "type": "doc",
        "version": 1,
        "content": [
            {
                "type": "paragraph",
                "content": [{ "type": "text", "text": text }]
            }
        ]
    })
}

/// Everything needed to create one issue, before field ids are known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueDraft {
    pub issue_type: String,
    pub summary: String,
    pub description: String,
    pub epic_key: Option<String>,
    pub acceptance_criteria: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Compose the `POST /rest/api/3/issue` body.
///
/// The epic link is only set for non-epic issue types, and each optional
/// field is silently skipped when the issue type has no field of that name.
pub fn build_issue_payload(
    project_key: &str,
    issue_type: &IssueTypeFields,
    draft: &IssueDraft,
) -> Value {
    let mut fields = Map::new();
    fields.insert("project".into(), json!({ "key": project_key }));
    fields.insert("summary".into(), json!(draft.summary));
    fields.insert("issuetype".into(), json!({ "id": issue_type.id }));
    fields.insert("description".into(), adf_paragraph(&draft.description));

    let is_epic = draft.issue_type.eq_ignore_ascii_case("epic");
    if let Some(epic_key) = non_empty(draft.epic_key.as_deref()).filter(|_| !is_epic) {
        match issue_type.field_id_named(EPIC_LINK_FIELD) {
            Some(id) => {
                fields.insert(id.to_string(), json!(epic_key));
            }
            None => tracing::warn!(
                issue_type = %draft.issue_type,
                "Epic Link field not found for this issue type"
            ),
        }
    }

    if let Some(criteria) = non_empty(draft.acceptance_criteria.as_deref()) {
        match issue_type.field_id_named(ACCEPTANCE_CRITERIA_FIELD) {
            Some(id) => {
                fields.insert(id.to_string(), adf_paragraph(criteria));
            }
            None => tracing::warn!(
                issue_type = %draft.issue_type,
                "Acceptance Criteria field not found for this issue type"
            ),
        }
    }

    let mut body = Map::new();
    body.insert("fields".into(), Value::Object(fields));
    Value::Object(body)
}

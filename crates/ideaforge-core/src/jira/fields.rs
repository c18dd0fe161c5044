use super::client::FieldSchema;
use crate::error::{ForgeError, Result};
use std::collections::BTreeMap;

pub const EPIC_LINK_FIELD: &str = "Epic Link";
pub const ACCEPTANCE_CRITERIA_FIELD: &str = "Acceptance Criteria";

/// Lower-case an issue type name and fold the `storie` spelling into `story`.
pub fn normalize_issue_type(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    if lower == "storie" {
        "story".to_string()
    } else {
        lower
    }
}

// ---------------------------------------------------------------------------
// IssueTypeFields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueTypeFields {
    pub id: String,
    /// Field id (`customfield_10014`, ...) to schema.
    pub fields: BTreeMap<String, FieldSchema>,
}

impl IssueTypeFields {
    pub fn new(id: impl Into<String>, fields: BTreeMap<String, FieldSchema>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Id of the field whose display name is exactly `name`.
    pub fn field_id_named(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(_, schema)| schema.name == name)
            .map(|(id, _)| id.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProjectFieldMap
// ---------------------------------------------------------------------------

/// Issue types of one project, keyed by lower-cased name. Built fresh for
/// every issue creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFieldMap {
    types: BTreeMap<String, IssueTypeFields>,
}

impl ProjectFieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, issue_type_name: &str, fields: IssueTypeFields) {
        self.types.insert(issue_type_name.to_lowercase(), fields);
    }

    pub fn names(&self) -> Vec<String> {
        self.types.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn resolve(&self, requested: &str) -> Result<&IssueTypeFields> {
        self.types
            .get(&normalize_issue_type(requested))
            .ok_or_else(|| ForgeError::UnknownIssueType {
                requested: requested.to_string(),
                available: self.names(),
            })
    }
}

//! Jira issue creation.
//!
//! Custom field ids (`Epic Link`, `Acceptance Criteria`) differ per Jira
//! instance, so every creation first reads the project's createmeta issue
//! types and their field schemas, then builds the payload against them.

pub mod client;
pub mod fields;
pub mod payload;
pub mod submit;

pub use client::{FieldSchema, IssueTypeRef, JiraClient, JiraProject};
pub use fields::{normalize_issue_type, IssueTypeFields, ProjectFieldMap};
pub use payload::{adf_paragraph, build_issue_payload, IssueDraft};
pub use submit::{create_issue, fetch_field_map, resolve_project_key, submit_item, SubmittedItem};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Epic / Task / Story
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epic {
    pub id: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub acceptance_criteria: String,
    #[serde(default)]
    pub epic_id: String,
}

/// Description is conventionally "As a ..., I want ... so that ...".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub epic_id: String,
}

// ---------------------------------------------------------------------------
// Requirements
// ---------------------------------------------------------------------------

/// Typed view over one structured-generation response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub epics: Vec<Epic>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub stories: Vec<Story>,
}

impl Requirements {
    /// Duplicate ids and dangling `epicId` references. Advisory only: model
    /// output is passed through even when this is non-empty.
    pub fn consistency_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();
        let ids = self
            .epics
            .iter()
            .map(|e| e.id.as_str())
            .chain(self.tasks.iter().map(|t| t.id.as_str()))
            .chain(self.stories.iter().map(|s| s.id.as_str()));
        for id in ids {
            if !seen.insert(id) {
                warnings.push(format!("duplicate id '{id}'"));
            }
        }

        let epic_ids: HashSet<&str> = self.epics.iter().map(|e| e.id.as_str()).collect();
        for task in &self.tasks {
            if !epic_ids.contains(task.epic_id.as_str()) {
                warnings.push(format!(
                    "task '{}' references unknown epic '{}'",
                    task.id, task.epic_id
                ));
            }
        }
        for story in &self.stories {
            if !epic_ids.contains(story.epic_id.as_str()) {
                warnings.push(format!(
                    "story '{}' references unknown epic '{}'",
                    story.id, story.epic_id
                ));
            }
        }
        warnings
    }
}

// ---------------------------------------------------------------------------
// ItemType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Epic,
    Task,
    Story,
}

impl ItemType {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Epic => "epic",
            ItemType::Task => "task",
            ItemType::Story => "story",
        }
    }

    /// Jira issue type name this item is created as.
    pub fn issue_type_name(self) -> &'static str {
        match self {
            ItemType::Epic => "Epic",
            ItemType::Task => "Task",
            ItemType::Story => "Story",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemType {
    type Err = crate::error::ForgeError;

    /// Case-insensitive. The UI pluralises "story" by stripping the trailing
    /// "s" from "stories", so "storie" is accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epic" => Ok(ItemType::Epic),
            "task" => Ok(ItemType::Task),
            "story" | "storie" => Ok(ItemType::Story),
            _ => Err(crate::error::ForgeError::InvalidItemType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Requirements {
        serde_json::from_str(
            r#"{
                "epics": [{"id": "E1", "summary": "Accounts", "description": "d"}],
                "tasks": [{"id": "T1", "summary": "Login form", "description": "d",
                           "acceptanceCriteria": "renders", "epicId": "E1"}],
                "stories": [{"id": "S1", "summary": "Sign in",
                             "description": "As a user, I want to sign in so that...",
                             "epicId": "E1"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_camel_case_fields() {
        let req = sample();
        assert_eq!(req.tasks[0].acceptance_criteria, "renders");
        assert_eq!(req.stories[0].epic_id, "E1");
    }

    #[test]
    fn consistent_requirements_have_no_warnings() {
        assert!(sample().consistency_warnings().is_empty());
    }

    #[test]
    fn flags_duplicates_and_dangling_epics() {
        let mut req = sample();
        req.epics.push(req.epics[0].clone());
        req.stories[0].epic_id = "E9".into();
        let warnings = req.consistency_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.contains("duplicate id 'E1'")));
        assert!(warnings.iter().any(|w| w.contains("unknown epic 'E9'")));
    }

    #[test]
    fn item_type_accepts_storie() {
        assert_eq!("storie".parse::<ItemType>().unwrap(), ItemType::Story);
        assert_eq!("Story".parse::<ItemType>().unwrap(), ItemType::Story);
        assert_eq!("EPIC".parse::<ItemType>().unwrap(), ItemType::Epic);
    }

    #[test]
    fn item_type_rejects_unknown() {
        let err = "bug".parse::<ItemType>().unwrap_err();
        assert!(err.to_string().contains("Invalid item type: bug"));
    }
}

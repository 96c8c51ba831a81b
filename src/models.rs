//! Frontend Models
//!
//! Data structures matching backend entities.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque backend identifier.
///
/// The API is not consistent about id encoding, so both JSON strings and
/// numbers are accepted. Always serialized back as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Uint(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Id(s),
            Raw::Int(n) => Id(n.to_string()),
            Raw::Uint(n) => Id(n.to_string()),
        })
    }
}

/// Task completion state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

/// Training task (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub dog_id: Option<Id>,
    #[serde(default)]
    pub exercise_id: Option<Id>,
    #[serde(default)]
    pub scheduled_for: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Dog reference data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dog {
    pub id: Id,
    pub name: String,
}

/// Exercise reference data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Exercise {
    pub id: Id,
    pub title: String,
}

/// Completion statistics computed by the backend
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub total_tasks: u64,
    #[serde(default)]
    pub completed_tasks: u64,
    #[serde(default)]
    pub success_rate: Option<f64>,
}

/// Placeholder shown for values the backend did not provide
pub const PLACEHOLDER: &str = "—";

impl Summary {
    /// Success rate as a whole percentage, or the placeholder when absent.
    pub fn success_rate_label(&self) -> String {
        match self.success_rate {
            Some(rate) if rate.is_finite() => format!("{}%", (rate * 100.0).round() as i64),
            _ => PLACEHOLDER.to_string(),
        }
    }
}

/// `{ items: [...] }` envelope used by every list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ItemList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Response of `POST /tasks`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTask {
    pub id: Id,
}

/// Body of `POST /tasks`. Unset optionals are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dog_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults_for_missing_fields() {
        let task: Task = serde_json::from_str(r#"{"id": 7, "title": "Sit"}"#).unwrap();
        assert_eq!(task.id, Id::new("7"));
        assert!(task.steps.is_empty());
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.dog_id, None);
        assert_eq!(task.language, "en");
    }

    #[test]
    fn test_task_with_string_ids_and_status() {
        let json = r#"{
            "id": "a1",
            "title": "Recall",
            "steps": ["Call", "Treat"],
            "status": "completed",
            "dog_id": 3,
            "exercise_id": "ex-9",
            "scheduled_for": "2024-05-01T08:00:00.000Z",
            "language": "he"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.is_completed());
        assert_eq!(task.steps, vec!["Call", "Treat"]);
        assert_eq!(task.dog_id, Some(Id::new("3")));
        assert_eq!(task.exercise_id, Some(Id::new("ex-9")));
        assert_eq!(task.language, "he");
    }

    #[test]
    fn test_summary_null_rate_renders_placeholder() {
        let summary: Summary =
            serde_json::from_str(r#"{"total_tasks": 4, "completed_tasks": 0, "success_rate": null}"#).unwrap();
        assert_eq!(summary.success_rate, None);
        assert_eq!(summary.success_rate_label(), PLACEHOLDER);

        let missing: Summary = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.total_tasks, 0);
        assert_eq!(missing.success_rate_label(), PLACEHOLDER);
    }

    #[test]
    fn test_summary_rate_rounds_to_percent() {
        let summary = Summary { total_tasks: 3, completed_tasks: 2, success_rate: Some(0.6667) };
        assert_eq!(summary.success_rate_label(), "67%");
        let zero = Summary { success_rate: Some(0.0), ..Summary::default() };
        assert_eq!(zero.success_rate_label(), "0%");
    }

    #[test]
    fn test_item_list_missing_items() {
        let list: ItemList<Dog> = serde_json::from_str("{}").unwrap();
        assert!(list.items.is_empty());

        let list: ItemList<Dog> = serde_json::from_str(r#"{"items": [{"id": 1, "name": "Rex"}]}"#).unwrap();
        assert_eq!(list.items[0].name, "Rex");
    }

    #[test]
    fn test_create_request_omits_unset_optionals() {
        let request = CreateTaskRequest {
            title: "Sit".to_string(),
            steps: vec!["Mark".to_string()],
            dog_id: None,
            exercise_id: Some(Id::new("2")),
            scheduled_for: None,
            language: "en".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("dog_id"));
        assert!(!obj.contains_key("scheduled_for"));
        assert_eq!(obj["exercise_id"], "2");
        assert_eq!(obj["steps"], serde_json::json!(["Mark"]));
    }
}

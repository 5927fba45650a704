//! Task Models
//!
//! The remote-owned `Task` and the locally edited `Draft`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Opaque task identifier assigned by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// Backends differ on string vs numeric ids; both become opaque strings.
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(TaskId(s)),
            Value::Number(n) => Ok(TaskId(n.to_string())),
            other => Err(serde::de::Error::custom(format!("invalid task id: {other}"))),
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireTask")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: TaskId,
    pub title: String,
    pub duration: f64,
    pub description: String,
    pub completed: bool,
    /// Echoed back by the backend; never copied into an edit draft
    pub category: String,
}

/// Task as it arrives from the backend. Document stores may send `_id`,
/// `id`, or both; `_id` wins.
#[derive(Deserialize)]
struct WireTask {
    #[serde(rename = "_id", default)]
    document_id: Option<TaskId>,
    #[serde(default)]
    id: Option<TaskId>,
    #[serde(default, deserialize_with = "lenient_string")]
    title: String,
    #[serde(default, deserialize_with = "lenient_duration")]
    duration: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    description: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    completed: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    category: String,
}

impl TryFrom<WireTask> for Task {
    type Error = String;

    fn try_from(wire: WireTask) -> Result<Self, Self::Error> {
        let id = wire
            .document_id
            .or(wire.id)
            .ok_or_else(|| "task without `_id` or `id`".to_string())?;
        Ok(Self {
            id,
            title: wire.title,
            duration: wire.duration,
            description: wire.description,
            completed: wire.completed,
            category: wire.category,
        })
    }
}

impl Task {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration: 0.0,
            description: String::new(),
            completed: false,
            category: String::new(),
        }
    }

    /// Label for the completion state
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completada"
        } else {
            "Pendiente"
        }
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_duration<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

/// Form field names, as used by the input `name` attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Duration,
    Description,
    Category,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Duration => "duration",
            DraftField::Description => "description",
            DraftField::Category => "category",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(DraftField::Title),
            "duration" => Some(DraftField::Duration),
            "description" => Some(DraftField::Description),
            "category" => Some(DraftField::Category),
            _ => None,
        }
    }
}

/// Unsaved form values for a pending create or update.
///
/// Values are kept exactly as typed; the backend is the only validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub title: String,
    #[serde(serialize_with = "duration_as_number")]
    pub duration: String,
    pub description: String,
    pub category: String,
}

impl Draft {
    /// Draft pre-filled from a task. `category` stays at its empty default.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            duration: task.duration.to_string(),
            description: task.description.clone(),
            category: String::new(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Duration => &self.duration,
            DraftField::Description => &self.description,
            DraftField::Category => &self.category,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Duration => &mut self.duration,
            DraftField::Description => &mut self.description,
            DraftField::Category => &mut self.category,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// Numeric text goes out as a JSON number, anything else verbatim.
fn duration_as_number<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return serializer.serialize_i64(n);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => serializer.serialize_f64(f),
        _ => serializer.serialize_str(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_deserializes_document_store_shape() {
        let task: Task = serde_json::from_value(json!({
            "_id": "65a1",
            "title": "Write report",
            "duration": 30,
            "description": "quarterly",
            "completed": true,
            "__v": 0
        }))
        .unwrap();

        assert_eq!(task.id, TaskId::from("65a1"));
        assert_eq!(task.duration, 30.0);
        assert!(task.completed);
        assert_eq!(task.category, "");
        assert_eq!(task.status_label(), "Completada");
    }

    #[test]
    fn test_task_accepts_numeric_id_and_string_duration() {
        let task: Task = serde_json::from_value(json!({
            "id": 7,
            "title": "Numeric",
            "duration": "12"
        }))
        .unwrap();

        assert_eq!(task.id.as_str(), "7");
        assert_eq!(task.duration, 12.0);
        assert!(!task.completed);
    }

    #[test]
    fn test_task_prefers_document_id_when_both_ids_present() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[{"_id":"65a1","id":"virtual","title":"Both","duration":2,"description":"x","completed":false}]"#,
        )
        .unwrap();

        assert_eq!(tasks[0].id.as_str(), "65a1");
        assert_eq!(tasks[0].title, "Both");
    }

    #[test]
    fn test_task_tolerates_null_fields() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[{"_id":"65a1","title":null,"duration":null,"description":null,"completed":null,"category":null}]"#,
        )
        .unwrap();

        let task = &tasks[0];
        assert_eq!(task.title, "");
        assert_eq!(task.duration, 0.0);
        assert_eq!(task.description, "");
        assert!(!task.completed);
        assert_eq!(task.category, "");
    }

    #[test]
    fn test_task_without_any_id_is_rejected() {
        let result = serde_json::from_value::<Task>(json!({ "title": "orphan" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_task_serializes_with_document_id() {
        let value = serde_json::to_value(Task::new("9", "Out")).unwrap();
        assert_eq!(value["_id"], json!("9"));
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_draft_body_sends_numeric_duration() {
        let draft = Draft {
            title: "A".into(),
            duration: "5".into(),
            description: "d".into(),
            category: String::new(),
        };
        assert_eq!(
            serde_json::to_string(&draft).unwrap(),
            r#"{"title":"A","duration":5,"description":"d","category":""}"#
        );
    }

    #[test]
    fn test_draft_body_keeps_non_numeric_duration() {
        let draft = Draft::default();
        assert_eq!(serde_json::to_value(&draft).unwrap()["duration"], json!(""));

        let draft = Draft { duration: "1.5".into(), ..Draft::default() };
        assert_eq!(serde_json::to_value(&draft).unwrap()["duration"], json!(1.5));
    }

    #[test]
    fn test_draft_from_task_skips_category() {
        let mut task = Task::new("1", "Title");
        task.duration = 45.0;
        task.description = "desc".into();
        task.category = "X".into();

        let draft = Draft::from_task(&task);
        assert_eq!(draft.title, "Title");
        assert_eq!(draft.duration, "45");
        assert_eq!(draft.description, "desc");
        assert_eq!(draft.category, "");
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in [DraftField::Title, DraftField::Duration, DraftField::Description, DraftField::Category] {
            assert_eq!(DraftField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(DraftField::from_name("priority"), None);
    }
}

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const TASK_REQUIRED: &str = "Task is required";
pub const COMPLETED_MUST_BE_BOOLEAN: &str = "Completed must be a boolean";

/// A task as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    /// Store-assigned id (24-character hex ObjectId)
    #[schema(example = "65f1c0a2e4b0a1b2c3d4e5f6")]
    pub id: String,
    /// Task description
    #[schema(example = "Buy milk")]
    pub task: String,
    pub completed: bool,
}

/// Stored shape of a task in the `todos` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub task: String,
    /// Documents written without the flag read back as not completed
    #[serde(default)]
    pub completed: bool,
}

impl From<TodoDocument> for Todo {
    fn from(doc: TodoDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            task: doc.task,
            completed: doc.completed,
        }
    }
}

/// A validated task ready to be inserted; the store assigns `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub task: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            completed: false,
        }
    }
}

/// Body of `POST /todos`.
///
/// A missing, `null` or non-string `task` deserializes to `None` and is
/// reported by validation instead of failing JSON extraction.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateTodo {
    #[serde(default, deserialize_with = "string_or_none")]
    #[validate(
        required(message = "Task is required"),
        custom(function = "not_blank", message = "Task is required")
    )]
    #[schema(value_type = String, example = "Buy milk")]
    pub task: Option<String>,
}

impl CreateTodo {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: Some(task.into()),
        }
    }
}

/// Body of `PUT /todos/{id}`. Only `completed` can change.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTodo {
    #[serde(default, deserialize_with = "bool_or_none")]
    #[validate(required(message = "Completed must be a boolean"))]
    #[schema(value_type = bool, example = true)]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
        }
    }
}

/// Body of `DELETE /todos/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Todo deleted")]
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Todo deleted".to_string(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn bool_or_none<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

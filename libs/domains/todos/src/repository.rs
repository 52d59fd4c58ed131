use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::TodoResult;
use crate::models::{NewTodo, Todo};

/// Persistence interface for tasks.
///
/// Implementations report store failures as `TodoError::Database`; they
/// never decide HTTP semantics such as strict 404 handling.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All tasks in insertion order
    async fn list(&self) -> TodoResult<Vec<Todo>>;

    /// Persist a task and return it with its assigned id
    async fn insert(&self, todo: NewTodo) -> TodoResult<Todo>;

    /// Set `completed` and return the post-update task, or `None` if no
    /// task has this id.
    async fn set_completed(&self, id: ObjectId, completed: bool) -> TodoResult<Option<Todo>>;

    /// Remove a task. Removing an absent id succeeds.
    async fn delete(&self, id: ObjectId) -> TodoResult<()>;
}

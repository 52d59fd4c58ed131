//! Todo Service - validation and normalization in front of the repository

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTodo, NewTodo, Todo, UpdateTodo};
use crate::repository::TodoRepository;

pub const WELCOME_MESSAGE: &str = "Welcome to the To-Do List API!";

/// Task operations backed by a [`TodoRepository`].
///
/// Inputs are validated before the repository is touched. With strict
/// updates enabled, updating an unknown id is `TodoError::NotFound` instead
/// of `Ok(None)`.
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
    strict_updates: bool,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            strict_updates: false,
        }
    }

    pub fn with_strict_updates(mut self, strict: bool) -> Self {
        self.strict_updates = strict;
        self
    }

    pub fn welcome(&self) -> &'static str {
        tracing::info!("Root route accessed");
        WELCOME_MESSAGE
    }

    #[instrument(skip(self))]
    pub async fn list_todos(&self) -> TodoResult<Vec<Todo>> {
        self.repository
            .list()
            .await
            .inspect_err(|e| tracing::error!(operation = "list", error = %e, "Error fetching todos"))
    }

    /// Validate, trim and persist a new task. `completed` always starts false.
    #[instrument(skip(self, input))]
    pub async fn create_todo(&self, input: CreateTodo) -> TodoResult<Todo> {
        input.validate()?;

        let task = input.task.as_deref().unwrap_or_default().trim();
        self.repository
            .insert(NewTodo::new(task))
            .await
            .inspect_err(|e| tracing::error!(operation = "create", error = %e, "Error saving todo"))
    }

    /// Set `completed` on the task with `id`.
    #[instrument(skip(self, input))]
    pub async fn update_completion(&self, id: ObjectId, input: UpdateTodo) -> TodoResult<Option<Todo>> {
        input.validate()?;
        let completed = input.completed.unwrap_or_default();

        let updated = self
            .repository
            .set_completed(id, completed)
            .await
            .inspect_err(|e| tracing::error!(operation = "update", error = %e, "Error updating todo"))?;

        match updated {
            None if self.strict_updates => Err(TodoError::NotFound(id)),
            other => Ok(other),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_todo(&self, id: ObjectId) -> TodoResult<()> {
        self.repository
            .delete(id)
            .await
            .inspect_err(|e| tracing::error!(operation = "delete", error = %e, "Error deleting todo"))
    }
}

impl<R: TodoRepository> Clone for TodoService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            strict_updates: self.strict_updates,
        }
    }
}

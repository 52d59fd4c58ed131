//! In-process TodoRepository used for local runs without MongoDB and in tests

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::error::TodoResult;
use crate::models::{NewTodo, Todo, TodoDocument};
use crate::repository::TodoRepository;

#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<Vec<TodoDocument>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.iter().cloned().map(Todo::from).collect())
    }

    async fn insert(&self, todo: NewTodo) -> TodoResult<Todo> {
        let doc = TodoDocument {
            id: ObjectId::new(),
            task: todo.task,
            completed: todo.completed,
        };
        self.todos.write().await.push(doc.clone());
        Ok(doc.into())
    }

    async fn set_completed(&self, id: ObjectId, completed: bool) -> TodoResult<Option<Todo>> {
        let mut todos = self.todos.write().await;
        Ok(todos.iter_mut().find(|t| t.id == id).map(|t| {
            t.completed = completed;
            Todo::from(t.clone())
        }))
    }

    async fn delete(&self, id: ObjectId) -> TodoResult<()> {
        self.todos.write().await.retain(|t| t.id != id);
        Ok(())
    }
}

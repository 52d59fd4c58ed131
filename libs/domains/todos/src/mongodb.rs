//! MongoDB implementation of TodoRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{doc, oid::ObjectId},
    options::ReturnDocument,
};
use tracing::instrument;

use crate::error::{TodoError, TodoResult};
use crate::models::{NewTodo, Todo, TodoDocument};
use crate::repository::TodoRepository;

pub const COLLECTION_NAME: &str = "todos";

/// Stores tasks in the `todos` collection of a MongoDB database
#[derive(Clone)]
pub struct MongoTodoRepository {
    collection: Collection<TodoDocument>,
}

impl MongoTodoRepository {
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoTodoRepository::new(client.database("todo-db"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<TodoDocument>(collection_name),
        }
    }

    pub fn collection(&self) -> &Collection<TodoDocument> {
        &self.collection
    }
}

#[async_trait]
impl TodoRepository for MongoTodoRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        // ObjectIds grow monotonically, so `_id` order is insertion order.
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let docs: Vec<TodoDocument> = cursor.try_collect().await?;

        Ok(docs.into_iter().map(Todo::from).collect())
    }

    #[instrument(skip(self, todo), fields(task_len = todo.task.len()))]
    async fn insert(&self, todo: NewTodo) -> TodoResult<Todo> {
        let result = self
            .collection
            .clone_with_type::<NewTodo>()
            .insert_one(&todo)
            .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            TodoError::Internal(format!("unexpected inserted id: {}", result.inserted_id))
        })?;

        tracing::info!(todo_id = %id, "Todo created");
        Ok(TodoDocument {
            id,
            task: todo.task,
            completed: todo.completed,
        }
        .into())
    }

    #[instrument(skip(self))]
    async fn set_completed(&self, id: ObjectId, completed: bool) -> TodoResult<Option<Todo>> {
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": { "completed": completed } })
            .return_document(ReturnDocument::After)
            .await?;

        match &updated {
            Some(_) => tracing::info!(todo_id = %id, completed, "Todo updated"),
            None => tracing::debug!(todo_id = %id, "No todo to update"),
        }

        Ok(updated.map(Todo::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> TodoResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        tracing::info!(todo_id = %id, deleted = result.deleted_count, "Todo delete processed");
        Ok(())
    }
}

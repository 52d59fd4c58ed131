//! Todos Domain
//!
//! Task resource of the To-Do API: a task is a short text plus a completion
//! flag, stored in the `todos` MongoDB collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← GET /, GET|POST /todos, PUT|DELETE /todos/{id}
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, trimming, strict-update policy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + MongoDB and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Todo, TodoDocument, request bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{MongoTodoRepository, TodoService, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoTodoRepository::new(client.database("todo-db"));
//! let service = TodoService::new(repository).with_strict_updates(false);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{TodoError, TodoResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryTodoRepository;
pub use models::{CreateTodo, DeleteResponse, NewTodo, Todo, TodoDocument, UpdateTodo};
pub use mongodb::MongoTodoRepository;
pub use repository::TodoRepository;
pub use service::{TodoService, WELCOME_MESSAGE};

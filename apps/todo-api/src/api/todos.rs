//! Wires the todos domain to the configured store.

use axum::Router;
use domain_todos::{InMemoryTodoRepository, MongoTodoRepository, TodoService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let strict = state.config.strict_updates;

    match state.database() {
        Some(db) => {
            let service = TodoService::new(MongoTodoRepository::new(db)).with_strict_updates(strict);
            handlers::router(service)
        }
        None => {
            tracing::warn!("Using in-memory task store; data is lost on restart");
            let service = TodoService::new(InMemoryTodoRepository::new()).with_strict_updates(strict);
            handlers::router(service)
        }
    }
}

//! HTTP routes of the To-Do API

pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Task routes plus readiness; docs and `/health` are added in `main`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(todos::router(state))
        .merge(health::router(state.clone()))
}

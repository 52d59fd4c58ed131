use axum::{
    Json, Router,
    extract::State,
    routing::{get, put},
};
use axum_helpers::{
    ObjectIdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TodoResult;
use crate::models::{CreateTodo, DeleteResponse, Todo, UpdateTodo};
use crate::repository::TodoRepository;
use crate::service::TodoService;

/// OpenAPI documentation for the To-Do API
#[derive(OpenApi)]
#[openapi(
    paths(welcome, list_todos, create_todo, update_todo, delete_todo),
    components(
        schemas(Todo, CreateTodo, UpdateTodo, DeleteResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Todos", description = "Task management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Routes for `/` and the `/todos` resource
pub fn router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(welcome))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(shared_service)
}

/// Greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "Todos",
    responses(
        (status = 200, description = "Welcome to the To-Do List API!", body = String, content_type = "text/plain")
    )
)]
async fn welcome<R: TodoRepository>(State(service): State<Arc<TodoService<R>>>) -> &'static str {
    service.welcome()
}

/// List every task
#[utoipa::path(
    get,
    path = "/todos",
    tag = "Todos",
    responses(
        (status = 200, description = "All tasks", body = Vec<Todo>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_todos<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
) -> TodoResult<Json<Vec<Todo>>> {
    let todos = service.list_todos().await?;
    Ok(Json(todos))
}

/// Create a task
#[utoipa::path(
    post,
    path = "/todos",
    tag = "Todos",
    request_body = CreateTodo,
    responses(
        (status = 200, description = "Task created", body = Todo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTodo>,
) -> TodoResult<Json<Todo>> {
    let todo = service.create_todo(input).await?;
    Ok(Json(todo))
}

/// Set the completion flag of a task
#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "Todos",
    params(
        ("id" = String, Path, description = "Task id (24-character hex ObjectId)")
    ),
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "Updated task, or null when no task has this id", body = Todo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    ValidatedJson(input): ValidatedJson<UpdateTodo>,
) -> TodoResult<Json<Option<Todo>>> {
    let todo = service.update_completion(id, input).await?;
    Ok(Json(todo))
}

/// Delete a task. Deleting an absent task also succeeds.
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "Todos",
    params(
        ("id" = String, Path, description = "Task id (24-character hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Task deleted", body = DeleteResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_todo<R: TodoRepository>(
    State(service): State<Arc<TodoService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> TodoResult<Json<DeleteResponse>> {
    service.delete_todo(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}

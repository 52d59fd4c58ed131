//! Handler tests for the Todos domain
//!
//! Drive the domain router with `oneshot` against the in-memory repository:
//! - Request bodies and validation failures
//! - Response bodies and status codes
//! - Error envelopes for store failures

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_todos::{
    DeleteResponse, InMemoryTodoRepository, NewTodo, Todo, TodoError, TodoRepository, TodoResult,
    TodoService, handlers,
};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use test_utils::assertions::assert_object_id;
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(TodoService::new(InMemoryTodoRepository::new()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, task: &str) -> Todo {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/todos", json!({ "task": task })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response.into_body()).await
}

async fn list(app: &Router) -> Vec<Todo> {
    let response = app.clone().oneshot(empty_request("GET", "/todos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_root_returns_greeting() {
    let response = app().oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to the To-Do List API!");
}

#[tokio::test]
async fn test_list_starts_empty() {
    assert!(list(&app()).await.is_empty());
}

#[tokio::test]
async fn test_create_then_list() {
    let app = app();

    let created = create(&app, "Buy milk").await;
    assert_object_id(&created.id, "created id");
    assert_eq!(created.task, "Buy milk");
    assert!(!created.completed);

    let todos = list(&app).await;
    assert_eq!(todos, vec![created]);
}

#[tokio::test]
async fn test_create_trims_task() {
    let created = create(&app(), "  Walk dog  ").await;
    assert_eq!(created.task, "Walk dog");
}

#[tokio::test]
async fn test_create_ignores_client_completed_flag() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/todos",
            json!({ "task": "Pay rent", "completed": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let todo: Todo = json_body(response.into_body()).await;
    assert!(!todo.completed);
}

#[tokio::test]
async fn test_create_rejects_missing_or_blank_task() {
    let app = app();

    for body in [
        json!({ "task": "" }),
        json!({ "task": "   " }),
        json!({}),
        json!({ "task": 7 }),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/todos", body.clone()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        let error: Value = json_body(response.into_body()).await;
        assert_eq!(error["error"], "VALIDATION_ERROR");
        assert_eq!(
            error["errors"],
            json!([{ "field": "task", "message": "Task is required" }])
        );
    }

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/todos")
        .header("content-type", "application/json")
        .body(Body::from("{\"task\":"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_body_without_content_type_is_validated_as_empty() {
    let app = app();
    let created = create(&app, "Untouched").await;

    let request = |method: &str, uri: &str, body: &str| {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap()
    };

    let response = app
        .clone()
        .oneshot(request("POST", "/todos", r#"{"task":"Buy milk"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(
        error["errors"],
        json!([{ "field": "task", "message": "Task is required" }])
    );

    let uri = format!("/todos/{}", created.id);
    let response = app
        .clone()
        .oneshot(request("PUT", &uri, r#"{"completed":true}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(
        error["errors"],
        json!([{ "field": "completed", "message": "Completed must be a boolean" }])
    );

    assert_eq!(list(&app).await, vec![created]);
}

#[tokio::test]
async fn test_update_sets_completed_and_is_repeatable() {
    let app = app();
    let created = create(&app, "Write report").await;
    let uri = format!("/todos/{}", created.id);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, json!({ "completed": true })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: Todo = json_body(response.into_body()).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.task, "Write report");
        assert!(updated.completed);
    }

    let response = app
        .clone()
        .oneshot(json_request("PUT", &uri, json!({ "completed": false })))
        .await
        .unwrap();
    let updated: Todo = json_body(response.into_body()).await;
    assert!(!updated.completed);
}

#[tokio::test]
async fn test_update_rejects_non_boolean() {
    let app = app();
    let created = create(&app, "Call mom").await;
    let uri = format!("/todos/{}", created.id);

    for body in [json!({ "completed": "yes" }), json!({})] {
        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: Value = json_body(response.into_body()).await;
        assert_eq!(
            error["errors"],
            json!([{ "field": "completed", "message": "Completed must be a boolean" }])
        );
    }

    assert!(!list(&app).await[0].completed);
}

#[tokio::test]
async fn test_update_unknown_id_returns_null() {
    let app = app();
    let existing = create(&app, "Keep me").await;

    let uri = format!("/todos/{}", ObjectId::new().to_hex());
    let response = app
        .clone()
        .oneshot(json_request("PUT", &uri, json!({ "completed": true })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, Value::Null);

    assert_eq!(list(&app).await, vec![existing]);
}

#[tokio::test]
async fn test_update_unknown_id_strict_returns_404() {
    let app = handlers::router(
        TodoService::new(InMemoryTodoRepository::new()).with_strict_updates(true),
    );

    let uri = format!("/todos/{}", ObjectId::new().to_hex());
    let response = app
        .oneshot(json_request("PUT", &uri, json!({ "completed": true })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = app();
    let created = create(&app, "Temporary").await;
    let uri = format!("/todos/{}", created.id);

    for _ in 0..2 {
        let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: DeleteResponse = json_body(response.into_body()).await;
        assert_eq!(body.message, "Todo deleted");
    }

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = app();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/todos/not-an-id"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: Value = json_body(response.into_body()).await;
    assert_eq!(error["error"], "INVALID_ID");

    let response = app
        .oneshot(json_request("PUT", "/todos/123", json!({ "completed": true })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let app = app();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move { create(&app, &format!("task {}", i)).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().id);
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 10);
    assert_eq!(list(&app).await.len(), 10);
}

/// Repository whose every call fails like an unreachable store
struct FailingRepository;

#[async_trait]
impl TodoRepository for FailingRepository {
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        Err(TodoError::Database("connection refused".into()))
    }

    async fn insert(&self, _todo: NewTodo) -> TodoResult<Todo> {
        Err(TodoError::Database("connection refused".into()))
    }

    async fn set_completed(&self, _id: ObjectId, _completed: bool) -> TodoResult<Option<Todo>> {
        Err(TodoError::Database("connection refused".into()))
    }

    async fn delete(&self, _id: ObjectId) -> TodoResult<()> {
        Err(TodoError::Database("connection refused".into()))
    }
}

#[tokio::test]
async fn test_store_failure_returns_server_error() {
    let app = handlers::router(TodoService::new(FailingRepository));
    let uri = format!("/todos/{}", ObjectId::new().to_hex());

    let requests = [
        empty_request("GET", "/todos"),
        json_request("POST", "/todos", json!({ "task": "x" })),
        json_request("PUT", &uri, json!({ "completed": true })),
        empty_request("DELETE", &uri),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: Value = json_body(response.into_body()).await;
        assert_eq!(error["message"], "Server error");
        assert_eq!(error["error"], "DATABASE_ERROR");
    }
}

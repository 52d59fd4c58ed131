//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// 200 when every configured store answers, 503 otherwise.
/// The in-memory store has nothing to probe and is always ready.
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let mut checks = Vec::new();

    if let Some(client) = &state.mongo_client {
        let mongodb: HealthCheckFuture = Box::pin(async move {
            let status = check_health_detailed(client).await;
            tracing::debug!(response_time_ms = status.response_time_ms, "MongoDB ping");
            if status.healthy {
                Ok(())
            } else {
                Err(status.message.unwrap_or_else(|| "ping failed".to_string()))
            }
        });
        checks.push(("mongodb", mongodb));
    }

    run_health_checks(checks).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, StoreBackend};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::MongoConfig;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn memory_state() -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                mongodb: MongoConfig::new("mongodb://localhost:27017"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                store: StoreBackend::Memory,
                strict_updates: false,
                log_file: None,
            },
            mongo_client: None,
        }
    }

    #[tokio::test]
    async fn test_memory_store_is_ready() {
        let response = router(memory_state())
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ready");
    }
}

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing_with_log_file, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, StoreBackend};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing_with_log_file(&config.environment, config.log_file.as_deref())?;

    let mongo_client = match config.store {
        StoreBackend::Mongodb => {
            info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());
            let client = database::mongodb::connect_with_policy(&config.mongodb).await?;
            info!(database = config.mongodb.database(), "Using MongoDB database");
            Some(client)
        }
        StoreBackend::Memory => None,
    };

    let state = AppState {
        config,
        mongo_client,
    };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(state.config.app));

    info!(
        store = %state.config.store,
        strict_updates = state.config.strict_updates,
        "Starting To-Do API (30s shutdown timeout)"
    );

    let AppState { config, mongo_client } = state;
    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        if let Some(client) = mongo_client {
            info!("Shutting down: closing MongoDB connections");
            client.shutdown().await;
            info!("MongoDB connection closed");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("To-Do API shutdown complete");
    Ok(())
}

//! MongoDB connection management and health checks.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE, DEFAULT_URL, MongoConfig};
pub use connector::{connect_from_config, connect_from_config_with_retry, connect_with_policy};
pub use health::{HealthStatus, check_health_detailed};

pub use mongodb::{Client, Collection, Database};

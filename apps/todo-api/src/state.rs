//! Shared application state passed to the route builders.

use mongodb::{Client, Database};

use crate::config::Config;

/// Cloned per router; the MongoDB client shares one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when running with the in-memory store
    pub mongo_client: Option<Client>,
}

impl AppState {
    pub fn database(&self) -> Option<Database> {
        self.mongo_client
            .as_ref()
            .map(|client| client.database(self.config.mongodb.database()))
    }
}

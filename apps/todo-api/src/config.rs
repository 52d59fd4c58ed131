use core_config::{AppInfo, FromEnv, app_info, env_parse, server::ServerConfig};
use database::mongodb::MongoConfig;
use std::path::PathBuf;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Where tasks are kept
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    #[default]
    Mongodb,
    /// Process-local store, lost on restart
    Memory,
}

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `TODO_STORE`
    pub store: StoreBackend,
    /// `TODO_STRICT_UPDATES`: 404 instead of `null` when updating an unknown id
    pub strict_updates: bool,
    /// `LOG_FILE`: extra JSON log sink
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let store = env_parse("TODO_STORE", StoreBackend::default())?;
        let strict_updates = env_parse("TODO_STRICT_UPDATES", false)?;
        let log_file = std::env::var_os("LOG_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            store,
            strict_updates,
            log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 8] = [
        "TODO_STORE",
        "TODO_STRICT_UPDATES",
        "LOG_FILE",
        "PORT",
        "MONGODB_URL",
        "MONGO_URL",
        "MONGODB_DATABASE",
        "MONGO_DATABASE",
    ];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        VARS.iter().map(|k| (*k, None)).collect()
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(unset_all(), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.app.name, "todo_api");
            assert_eq!(config.store, StoreBackend::Mongodb);
            assert!(!config.strict_updates);
            assert!(config.log_file.is_none());
            assert_eq!(config.server.port, 5000);
            assert_eq!(config.mongodb.url(), "mongodb://localhost:27017");
            assert_eq!(config.mongodb.database(), "todo-db");
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("TODO_STORE", Some("Memory")),
                ("TODO_STRICT_UPDATES", Some("true")),
                ("LOG_FILE", Some("/tmp/todo.log")),
                ("PORT", Some("8080")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.store, StoreBackend::Memory);
                assert!(config.strict_updates);
                assert_eq!(config.log_file, Some(PathBuf::from("/tmp/todo.log")));
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn test_invalid_values_are_errors() {
        temp_env::with_var("TODO_STORE", Some("sqlite"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("TODO_STORE"));
        });

        temp_env::with_var("TODO_STRICT_UPDATES", Some("maybe"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("TODO_STRICT_UPDATES"));
        });
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(StoreBackend::Mongodb.to_string(), "mongodb");
        assert_eq!("MONGODB".parse::<StoreBackend>().unwrap(), StoreBackend::Mongodb);
    }
}

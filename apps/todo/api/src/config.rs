use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, server::ServerConfig};
use domain_tasks::StorageConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3000
        let cors = CorsConfig::from_env()?;
        let storage = StorageConfig::from_env()?; // TASKS_DATA_FILE=data/tasks.json

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            storage,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(
            ["HOST", "PORT", "CORS_ALLOWED_ORIGIN", "TASKS_DATA_FILE", "APP_ENV"],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 3000);
                assert_eq!(config.storage.data_file, PathBuf::from("data/tasks.json"));
                assert_eq!(config.cors, CorsConfig::default());
                assert_eq!(config.app.name, "todo_api");
            },
        );
    }

    #[test]
    fn test_invalid_port_fails() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("PORT", Some("8081")),
                ("CORS_ALLOWED_ORIGIN", Some("http://a.test, http://b.test")),
                ("TASKS_DATA_FILE", Some("/tmp/todo/tasks.json")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 8081);
                assert_eq!(
                    config.cors.allowed_origins,
                    vec!["http://a.test", "http://b.test"]
                );
                assert_eq!(
                    config.storage.data_file,
                    PathBuf::from("/tmp/todo/tasks.json")
                );
            },
        );
    }
}

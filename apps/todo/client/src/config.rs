use core_config::{ConfigError, FromEnv, env_or_default};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_LOCAL_STORE: &str = "todo-local-storage.json";

/// Where the client talks to and where it falls back to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub local_store: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            local_store: PathBuf::from(DEFAULT_LOCAL_STORE),
        }
    }
}

impl FromEnv for ClientConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: env_or_default("TASKS_API_URL", DEFAULT_API_URL),
            local_store: PathBuf::from(env_or_default("TASKS_LOCAL_STORE", DEFAULT_LOCAL_STORE)),
        })
    }
}

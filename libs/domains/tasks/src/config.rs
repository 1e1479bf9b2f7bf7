use core_config::{ConfigError, FromEnv, env_or_default};
use std::path::PathBuf;

/// Location of the task document when `TASKS_DATA_FILE` is unset
pub const DEFAULT_DATA_FILE: &str = "data/tasks.json";

/// Task storage configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl FromEnv for StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            data_file: PathBuf::from(env_or_default("TASKS_DATA_FILE", DEFAULT_DATA_FILE)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_default_path() {
        temp_env::with_var_unset("TASKS_DATA_FILE", || {
            let config = StorageConfig::from_env().unwrap();
            assert_eq!(config.data_file, PathBuf::from("data/tasks.json"));
        });
    }

    #[test]
    fn test_storage_config_custom_path() {
        temp_env::with_var("TASKS_DATA_FILE", Some("/var/lib/todo/tasks.json"), || {
            let config = StorageConfig::from_env().unwrap();
            assert_eq!(config.data_file, PathBuf::from("/var/lib/todo/tasks.json"));
        });
    }
}

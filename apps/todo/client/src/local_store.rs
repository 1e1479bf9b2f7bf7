//! Local fallback persistence.
//!
//! A small key-value file: one JSON object mapping keys to string values.
//! The task list lives under [`TASKS_KEY`] as a JSON-serialized array.

use domain_tasks::Task;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::ClientResult;

/// Key holding the serialized task list
pub const TASKS_KEY: &str = "todoTasks";

#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> ClientResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_item(&self, key: &str) -> ClientResult<Option<String>> {
        let mut map = self.read_map().await?;
        Ok(map.remove(key))
    }

    pub async fn set_item(&self, key: &str, value: String) -> ClientResult<()> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::write(&self.path, serde_json::to_string_pretty(&map)?).await?;
        Ok(())
    }

    /// Tasks saved under [`TASKS_KEY`]; absent means none
    pub async fn load_tasks(&self) -> ClientResult<Vec<Task>> {
        match self.get_item(TASKS_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn save_tasks(&self, tasks: &[Task]) -> ClientResult<()> {
        self.set_item(TASKS_KEY, serde_json::to_string(tasks)?).await
    }
}

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{
    error::TaskResult,
    models::Task,
    repository::TaskStore,
};

/// Stores the whole task collection as one pretty-printed JSON array.
///
/// Writes go to a sibling temp file that is then renamed over the document,
/// so a reader sees either the old or the new collection, never a prefix.
/// Concurrent writers are not coordinated here.
pub struct JsonFileTaskStore {
    path: PathBuf,
}

impl JsonFileTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "tasks.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl TaskStore for JsonFileTaskStore {
    async fn read_all(&self) -> TaskResult<Vec<Task>> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    async fn write_all(&self, tasks: &[Task]) -> TaskResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await?;
        }

        let data = serde_json::to_string_pretty(tasks)?;
        let temp = self.temp_path();
        fs::write(&temp, data).await?;
        fs::rename(&temp, &self.path).await?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "Wrote task document");
        Ok(())
    }
}

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::TaskResult;
use crate::models::Task;

/// Whole-collection persistence for tasks.
///
/// The task list is read and written as one document; there is no per-task
/// access. Implementations must treat a missing document as an empty list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Read every persisted task
    async fn read_all(&self) -> TaskResult<Vec<Task>>;

    /// Replace the persisted collection with `tasks`
    async fn write_all(&self, tasks: &[Task]) -> TaskResult<()>;
}

/// In-memory store, used by tests and ephemeral runs
#[derive(Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn read_all(&self) -> TaskResult<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn write_all(&self, tasks: &[Task]) -> TaskResult<()> {
        *self.tasks.write().await = tasks.to_vec();
        Ok(())
    }
}

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskInput, new_task_id};
use crate::repository::TaskStore;

/// Service layer for task CRUD.
///
/// Every operation reads the full collection, applies one change and writes
/// the full collection back. Mutations are serialized within this process so
/// two concurrent requests cannot drop each other's write.
pub struct TaskService<S: TaskStore> {
    store: Arc<S>,
    write_lock: Arc<Mutex<()>>,
}

impl<S: TaskStore> TaskService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Direct access to the underlying store (readiness checks)
    pub fn store(&self) -> &S {
        &self.store
    }

    /// List all tasks in stored order
    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.store.read_all().await
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: &str) -> TaskResult<Task> {
        self.store
            .read_all()
            .await?
            .into_iter()
            .find(|task| task.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Create a task with a fresh id and creation timestamp
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: TaskInput) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let _guard = self.write_lock.lock().await;
        let mut tasks = self.store.read_all().await?;

        let task = input.into_task(new_task_id(), Utc::now());
        tasks.push(task.clone());
        self.store.write_all(&tasks).await?;

        tracing::info!(task_id = %task.id, "Created task");
        Ok(task)
    }

    /// Replace a task's fields, preserving `id` and `date_created`.
    ///
    /// An unknown id is reported before the payload is validated.
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: &str, input: TaskInput) -> TaskResult<Task> {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.store.read_all().await?;

        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;
        task.replace_with(input);
        let updated = task.clone();

        self.store.write_all(&tasks).await?;

        tracing::info!(task_id = %id, "Updated task");
        Ok(updated)
    }

    /// Delete a task, returning the removed record
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: &str) -> TaskResult<Task> {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.store.read_all().await?;

        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        let removed = tasks.remove(index);

        self.store.write_all(&tasks).await?;

        tracing::info!(task_id = %id, "Deleted task");
        Ok(removed)
    }
}

impl<S: TaskStore> Clone for TaskService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

use chrono::{DateTime, Utc};
use domain_tasks::{Task, TaskInput, TaskPriority, new_task_id};
use std::collections::BTreeSet;
use tracing::instrument;

use crate::api::TaskApi;
use crate::error::{ClientError, ClientResult};
use crate::local_store::LocalStore;

/// Where mutations are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    Remote,
    /// Entered once after a failed remote load; never left for the session
    Local,
}

/// The user-editable fields of a task, as entered in a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: TaskPriority,
    pub category: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Trim text fields and require a title
    fn into_input(self, completed: bool) -> ClientResult<TaskInput> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ClientError::Validation("Task title is required".to_string()));
        }

        Ok(TaskInput {
            title,
            description: self.description.trim().to_string(),
            due_date: self.due_date,
            priority: self.priority,
            category: self.category.trim().to_string(),
            completed,
        })
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            priority: task.priority,
            category: task.category.clone(),
        }
    }
}

/// Client-side application state: the task list and its derived categories.
///
/// Every mutation persists first (remote API or local store) and only then
/// touches `tasks`, so a failure leaves the in-memory list as it was.
pub struct TaskState<A: TaskApi> {
    api: A,
    local: LocalStore,
    mode: StoreMode,
    tasks: Vec<Task>,
    categories: BTreeSet<String>,
}

impl<A: TaskApi> TaskState<A> {
    pub fn new(api: A, local: LocalStore) -> Self {
        Self {
            api,
            local,
            mode: StoreMode::Remote,
            tasks: Vec::new(),
            categories: BTreeSet::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn mode(&self) -> StoreMode {
        self.mode
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn position(&self, id: &str) -> ClientResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }

    fn refresh_categories(&mut self) {
        self.categories = derive_categories(&self.tasks);
    }

    /// Load the task list.
    ///
    /// A remote failure switches to the local store for the rest of the
    /// session; the remote API is not retried.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> ClientResult<()> {
        if self.mode == StoreMode::Remote {
            match self.api.list().await {
                Ok(tasks) => {
                    self.tasks = tasks;
                    self.refresh_categories();
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("Failed to load tasks from API, using local store: {}", e);
                    self.mode = StoreMode::Local;
                }
            }
        }

        self.tasks = self.local.load_tasks().await?;
        self.refresh_categories();
        Ok(())
    }

    #[instrument(skip(self, draft), fields(task_title = %draft.title))]
    pub async fn add(&mut self, draft: TaskDraft) -> ClientResult<Task> {
        let input = draft.into_input(false)?;

        let task = match self.mode {
            StoreMode::Remote => self.api.create(&input).await?,
            StoreMode::Local => {
                let task = input.into_task(new_task_id(), Utc::now());
                let mut next = self.tasks.clone();
                next.push(task.clone());
                self.local.save_tasks(&next).await?;
                task
            }
        };

        self.tasks.push(task.clone());
        self.refresh_categories();
        Ok(task)
    }

    /// Replace the editable fields of a task; `completed` is kept
    #[instrument(skip(self, draft))]
    pub async fn update(&mut self, id: &str, draft: TaskDraft) -> ClientResult<Task> {
        let index = self.position(id)?;
        let input = draft.into_input(self.tasks[index].completed)?;
        self.commit_update(index, input).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_completion(&mut self, id: &str) -> ClientResult<Task> {
        let index = self.position(id)?;
        let mut input = self.tasks[index].to_input();
        input.completed = !input.completed;
        self.commit_update(index, input).await
    }

    async fn commit_update(&mut self, index: usize, input: TaskInput) -> ClientResult<Task> {
        let updated = match self.mode {
            StoreMode::Remote => self.api.update(&self.tasks[index].id, &input).await?,
            StoreMode::Local => {
                let mut next = self.tasks.clone();
                next[index].replace_with(input);
                self.local.save_tasks(&next).await?;
                next.swap_remove(index)
            }
        };

        self.tasks[index] = updated.clone();
        self.refresh_categories();
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: &str) -> ClientResult<Task> {
        let index = self.position(id)?;

        match self.mode {
            StoreMode::Remote => {
                self.api.delete(id).await?;
            }
            StoreMode::Local => {
                let mut next = self.tasks.clone();
                next.remove(index);
                self.local.save_tasks(&next).await?;
            }
        }

        let removed = self.tasks.remove(index);
        self.refresh_categories();
        Ok(removed)
    }
}

/// Distinct non-empty categories across `tasks`
pub fn derive_categories(tasks: &[Task]) -> BTreeSet<String> {
    tasks
        .iter()
        .filter(|task| !task.category.is_empty())
        .map(|task| task.category.clone())
        .collect()
}

//! Action dispatch: run one mutation, then re-render exactly once.

use chrono::NaiveDate;
use tracing::warn;

use crate::api::TaskApi;
use crate::error::ClientError;
use crate::state::{TaskDraft, TaskState};
use crate::view::{
    FilterSpec, SortKey, SortState, project, render_categories, render_detail, render_list,
};

/// Everything the user can do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(TaskDraft),
    Edit { id: String, draft: TaskDraft },
    ToggleCompletion(String),
    Delete(String),
    SetFilter(FilterSpec),
    Sort(SortKey),
    ShowDetails(String),
}

/// Result of one dispatch: the freshly rendered view and an optional alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub view: String,
    pub alert: Option<String>,
}

pub struct App<A: TaskApi> {
    state: TaskState<A>,
    filter: FilterSpec,
    sort: SortState,
    selected: Option<String>,
    today: NaiveDate,
}

fn alert_for(err: &ClientError, fallback: &str) -> String {
    match err {
        ClientError::Validation(message) => message.clone(),
        ClientError::NotFound(id) => format!("Task {} not found", id),
        _ => fallback.to_string(),
    }
}

impl<A: TaskApi> App<A> {
    pub fn new(state: TaskState<A>, today: NaiveDate) -> Self {
        Self {
            state,
            filter: FilterSpec::default(),
            sort: SortState::default(),
            selected: None,
            today,
        }
    }

    pub fn state(&self) -> &TaskState<A> {
        &self.state
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Initial load, falling back to the local store when the API is down
    pub async fn load(&mut self) -> DispatchOutcome {
        let alert = match self.state.load().await {
            Ok(()) => None,
            Err(e) => {
                warn!("Failed to load tasks: {}", e);
                Some("Failed to load tasks.".to_string())
            }
        };
        self.outcome(alert)
    }

    pub async fn dispatch(&mut self, action: Action) -> DispatchOutcome {
        let result = match action {
            Action::Add(draft) => self
                .state
                .add(draft)
                .await
                .map(|_| ())
                .map_err(|e| alert_for(&e, "Failed to add task. Please try again.")),
            Action::Edit { id, draft } => {
                let result = self
                    .state
                    .update(&id, draft)
                    .await
                    .map(|_| ())
                    .map_err(|e| alert_for(&e, "Failed to save changes. Please try again."));
                if result.is_ok() {
                    self.selected = None;
                }
                result
            }
            Action::ToggleCompletion(id) => self
                .state
                .toggle_completion(&id)
                .await
                .map(|_| ())
                .map_err(|e| alert_for(&e, "Failed to update task. Please try again.")),
            Action::Delete(id) => {
                let result = self
                    .state
                    .delete(&id)
                    .await
                    .map(|_| ())
                    .map_err(|e| alert_for(&e, "Failed to delete task. Please try again."));
                if result.is_ok() && self.selected.as_deref() == Some(id.as_str()) {
                    self.selected = None;
                }
                result
            }
            Action::SetFilter(filter) => {
                self.filter = filter;
                Ok(())
            }
            Action::Sort(key) => {
                self.sort.select(key);
                Ok(())
            }
            Action::ShowDetails(id) => {
                if self.state.find(&id).is_some() {
                    self.selected = Some(id);
                    Ok(())
                } else {
                    Err(format!("Task {} not found", id))
                }
            }
        };

        if let Err(alert) = &result {
            warn!(alert = %alert, "Action failed");
        }

        self.outcome(result.err())
    }

    fn outcome(&self, alert: Option<String>) -> DispatchOutcome {
        DispatchOutcome {
            view: self.render(),
            alert,
        }
    }

    /// Header, task list, then the detail panel when a task is selected
    pub fn render(&self) -> String {
        let visible = project(self.state.tasks(), &self.filter, &self.sort);

        let mut sections = vec![
            format!(
                "{} | sort: {} {} | showing {} of {}",
                render_categories(self.state.categories()),
                self.sort.key,
                self.sort.direction,
                visible.len(),
                self.state.tasks().len()
            ),
            render_list(&visible, self.today),
        ];

        if let Some(task) = self.selected.as_deref().and_then(|id| self.state.find(id)) {
            sections.push(render_detail(task));
        }

        sections.join("\n\n")
    }
}

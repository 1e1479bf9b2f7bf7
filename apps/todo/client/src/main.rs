//! Todo client CLI
//!
//! Loads the task list (API first, local file as fallback), applies the
//! requested filter, sort and action, and prints the resulting view.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use domain_tasks::TaskPriority;
use eyre::Result;
use std::path::PathBuf;
use todo_client::{
    Action, App, ClientConfig, DispatchOutcome, FilterSpec, HttpTaskApi, LocalStore, SortKey,
    TaskDraft, TaskState,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "todo-client")]
#[command(about = "Manage a task list backed by the todo API")]
struct Cli {
    /// API base URL (overrides TASKS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Local fallback store file (overrides TASKS_LOCAL_STORE)
    #[arg(long, global = true)]
    local_store: Option<PathBuf>,

    /// Status filter: all, active, completed
    #[arg(long, global = true, default_value = "all")]
    status: String,

    /// Priority filter: all, low, medium, high
    #[arg(long, global = true, default_value = "all")]
    priority: String,

    /// Category filter, or "all"
    #[arg(long, global = true, default_value = "all")]
    category: String,

    /// Sort key (dateCreated, dueDate, priority, title); repeat to toggle direction
    #[arg(long, global = true)]
    sort: Vec<SortKey>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the filtered, sorted task list
    List,

    /// Add a task
    Add {
        title: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a task; omitted fields keep their current value
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,

        /// Remove the due date
        #[arg(long, conflicts_with = "due")]
        clear_due: bool,
    },

    /// Flip a task between active and completed
    Toggle { id: String },

    /// Delete a task
    Delete { id: String },

    /// Show one task's details
    Show { id: String },
}

#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    description: Option<String>,

    /// Due date as YYYY-MM-DD
    #[arg(long)]
    due: Option<NaiveDate>,

    /// low, medium or high
    #[arg(long = "set-priority")]
    set_priority: Option<TaskPriority>,

    #[arg(long = "set-category")]
    set_category: Option<String>,
}

impl FieldArgs {
    fn apply(self, draft: &mut TaskDraft) {
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(due) = self.due {
            draft.due_date = Some(start_of_day(due));
        }
        if let Some(priority) = self.set_priority {
            draft.priority = priority;
        }
        if let Some(category) = self.set_category {
            draft.category = category;
        }
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn report(outcome: &DispatchOutcome) {
    if let Some(alert) = &outcome.alert {
        eprintln!("{}", alert);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(local_store) = cli.local_store {
        config.local_store = local_store;
    }

    info!(api_url = %config.api_url, "Loading tasks");

    let state = TaskState::new(
        HttpTaskApi::new(config.api_url.clone()),
        LocalStore::new(config.local_store.clone()),
    );
    let mut app = App::new(state, Local::now().date_naive());

    let outcome = app.load().await;
    report(&outcome);

    let filter = FilterSpec::parse(&cli.status, &cli.priority, &cli.category)?;
    report(&app.dispatch(Action::SetFilter(filter)).await);

    for key in cli.sort {
        report(&app.dispatch(Action::Sort(key)).await);
    }

    let action = match cli.command.unwrap_or(Commands::List) {
        Commands::List => None,
        Commands::Add { title, fields } => {
            let mut draft = TaskDraft::new(title);
            fields.apply(&mut draft);
            Some(Action::Add(draft))
        }
        Commands::Edit {
            id,
            title,
            fields,
            clear_due,
        } => {
            let mut draft = app
                .state()
                .find(&id)
                .map(TaskDraft::from)
                .unwrap_or_default();
            if let Some(title) = title {
                draft.title = title;
            }
            fields.apply(&mut draft);
            if clear_due {
                draft.due_date = None;
            }
            Some(Action::Edit { id, draft })
        }
        Commands::Toggle { id } => Some(Action::ToggleCompletion(id)),
        Commands::Delete { id } => Some(Action::Delete(id)),
        Commands::Show { id } => Some(Action::ShowDetails(id)),
    };

    let view = match action {
        Some(action) => {
            let outcome = app.dispatch(action).await;
            report(&outcome);
            outcome.view
        }
        None => app.render(),
    };

    println!("{}", view);
    Ok(())
}

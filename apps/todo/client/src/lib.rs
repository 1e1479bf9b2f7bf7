//! Todo client
//!
//! Holds the task list in memory, mirrors changes to the REST API (or to a
//! local key-value file when the API was unreachable at startup) and derives
//! the filtered, sorted view.
//!
//! ```text
//! Action ─► App::dispatch ─► TaskState (TaskApi | LocalStore) ─► view::project ─► render
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod local_store;
pub mod state;
pub mod view;

pub use api::{HttpTaskApi, TaskApi};
pub use app::{Action, App, DispatchOutcome};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use local_store::LocalStore;
pub use state::{StoreMode, TaskDraft, TaskState};
pub use view::{FilterSpec, SortDirection, SortKey, SortState, StatusFilter};

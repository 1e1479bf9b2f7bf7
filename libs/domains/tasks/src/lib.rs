//! Tasks Domain
//!
//! Task model, whole-document storage and the CRUD service behind the
//! `/api/tasks` endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← read-all → mutate → write-all, identity assignment
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  TaskStore  │  ← whole-collection persistence (JSON file, in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Task, TaskInput, TaskPriority
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{handlers, JsonFileTaskStore, TaskService};
//!
//! let store = JsonFileTaskStore::new("data/tasks.json");
//! let service = TaskService::new(store);
//! let router = handlers::router(service);
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod json_file;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use config::StorageConfig;
pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use json_file::JsonFileTaskStore;
pub use models::{Task, TaskInput, TaskPriority, new_task_id};
pub use repository::{InMemoryTaskStore, TaskStore};
pub use service::TaskService;

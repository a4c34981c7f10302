//! Tasks Domain
//!
//! This module provides a complete domain implementation for managing task
//! records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP surface (axum)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SQLite implementation)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{SqliteTaskRepository, TaskService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a database connection
//! let db = Database::connect("sqlite://./TMA.db?mode=rwc").await?;
//!
//! // Create a repository and service
//! let repository = SqliteTaskRepository::new(db);
//! let service = TaskService::new(repository);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use models::{DeleteConfirmation, Task, TaskPayload};
pub use repository::TaskRepository;
pub use service::TaskService;
pub use sqlite::SqliteTaskRepository;

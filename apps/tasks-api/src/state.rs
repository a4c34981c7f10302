//! Application state management
//!
//! This module defines the shared application state passed to request
//! handlers. The connection pool is owned here and injected into the
//! domain router; nothing holds a process-global handle.

use database::sqlite::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Fixed application configuration
    pub config: crate::config::Config,
    /// SQLite connection pool
    pub db: DatabaseConnection,
}

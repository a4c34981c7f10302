//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure:
//! - `TestDatabase`: in-memory SQLite database with migrations applied
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::TestDatabase;
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! // Use db.connection() to create your repository
//! # }
//! ```

mod sqlite;

pub use sqlite::TestDatabase;

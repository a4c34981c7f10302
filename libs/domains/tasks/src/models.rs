use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Task entity - the record managed by this service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier, assigned by the store at creation
    pub id: i64,
    /// Task title
    pub title: String,
    /// Task description
    pub description: String,
    /// Calendar date the task is due, stored as text
    pub due_date: String,
    /// Free-form workflow state, e.g. "open" or "done"
    pub status: String,
}

/// Request body for creating or replacing a task
///
/// The same payload serves both operations: create inserts a new row with a
/// fresh id, update overwrites every mutable field of an existing row.
/// All four fields are required and must be non-empty.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TaskPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub due_date: String,
    #[validate(length(min = 1))]
    pub status: String,
}

/// Confirmation body returned by a successful delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn task_deleted() -> Self {
        Self {
            message: "Task deleted successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> TaskPayload {
        TaskPayload {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            due_date: "2024-01-01".to_string(),
            status: "open".to_string(),
        }
    }

    #[test]
    fn test_full_payload_is_valid() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let mut input = payload();
        input.title = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_empty_due_date_is_rejected() {
        let mut input = payload();
        input.due_date = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_status_is_free_form() {
        let mut input = payload();
        input.status = "definitely-not-an-enum".to_string();
        assert!(input.validate().is_ok());
    }
}

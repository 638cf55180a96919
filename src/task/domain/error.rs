//! Error types for task domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The customer reference is empty after trimming.
    #[error("customer reference must not be empty")]
    EmptyCustomerReference,

    /// The acting user identifier or name is empty after trimming.
    #[error("acting user must have a non-empty identifier and name")]
    EmptyActor,

    /// The comment body is empty after trimming.
    #[error("comment content must not be empty")]
    EmptyCommentContent,

    /// The date range starts after it ends.
    #[error("invalid date range: {start} is after {end}")]
    InvertedDateRange {
        /// First day of the requested range.
        start: NaiveDate,
        /// Last day of the requested range.
        end: NaiveDate,
    },
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

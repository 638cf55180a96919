//! Service-level error taxonomy shared by lifecycle and query services.

use crate::{
    staff::{domain::StaffDomainError, ports::StaffDirectoryError},
    task::{
        domain::{CustomerReference, TaskDomainError, TaskId},
        ports::TaskRepositoryError,
    },
};
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Task input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Staff identifier validation failed.
    #[error(transparent)]
    StaffDomain(#[from] StaffDomainError),
    /// Staff resolution failed.
    #[error(transparent)]
    Staff(#[from] StaffDirectoryError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task exists with the identifier.
    #[error("task not found with id: {0}")]
    TaskNotFound(TaskId),
    /// No active task carries the customer reference.
    #[error("no active task found for customer reference: {0}")]
    NoActiveTaskForReference(CustomerReference),
    /// A reassignment cancelled the active task, then failed to store the
    /// replacement and failed to restore the cancelled task.
    #[error(
        "reassignment of customer reference {reference} left task {cancelled_task_id} \
         cancelled without a replacement: {store}; restore failed: {restore}"
    )]
    ReassignmentIncomplete {
        /// Reference that now has no active task.
        reference: CustomerReference,
        /// Task that stayed cancelled.
        cancelled_task_id: TaskId,
        /// Failure storing the replacement.
        #[source]
        store: TaskRepositoryError,
        /// Failure restoring the cancelled task.
        restore: TaskRepositoryError,
    },
}

/// Result type for task service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Coarse classification used by presentation layers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced task or staff member does not exist.
    NotFound,
    /// The caller supplied invalid input.
    InvalidInput,
    /// The write conflicts with existing state.
    Conflict,
    /// The backing store failed.
    Internal,
}

impl TaskLifecycleError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) | Self::StaffDomain(_) => ErrorKind::InvalidInput,
            Self::Staff(StaffDirectoryError::NotFound(_))
            | Self::Repository(TaskRepositoryError::NotFound(_))
            | Self::TaskNotFound(_)
            | Self::NoActiveTaskForReference(_) => ErrorKind::NotFound,
            Self::Staff(StaffDirectoryError::DuplicateStaff(_))
            | Self::Repository(TaskRepositoryError::DuplicateTask(_)) => ErrorKind::Conflict,
            Self::Repository(TaskRepositoryError::Persistence(_))
            | Self::ReassignmentIncomplete { .. } => ErrorKind::Internal,
        }
    }

    /// Returns whether the error means a referenced entity is missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }
}

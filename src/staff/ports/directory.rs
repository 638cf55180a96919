//! Staff lookup port consumed by the task lifecycle.

use crate::staff::domain::{StaffAssignee, StaffId};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for staff directory operations.
pub type StaffDirectoryResult<T> = Result<T, StaffDirectoryError>;

/// Resolves staff identifiers into assignee snapshots.
#[async_trait]
pub trait StaffDirectory: Send + Sync {
    /// Resolves a staff identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirectoryError::NotFound`] when no member has the
    /// given identifier.
    async fn resolve(&self, id: &StaffId) -> StaffDirectoryResult<StaffAssignee>;
}

/// Errors returned by staff directory implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StaffDirectoryError {
    /// No staff member has the identifier.
    #[error("staff member not found: {0}")]
    NotFound(StaffId),

    /// A staff member with the identifier is already registered.
    #[error("duplicate staff identifier: {0}")]
    DuplicateStaff(StaffId),
}

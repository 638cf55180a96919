//! Error types for staff record validation.

use thiserror::Error;

/// Errors returned while constructing staff domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StaffDomainError {
    /// The staff identifier is empty after trimming.
    #[error("staff identifier must not be empty")]
    EmptyStaffId,

    /// The staff name is outside the accepted length range.
    #[error("invalid staff name '{0}', expected 2 to 100 characters")]
    InvalidName(String),

    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The department is outside the accepted length range.
    #[error("invalid department '{0}', expected 2 to 50 characters")]
    InvalidDepartment(String),
}

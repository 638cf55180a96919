//! Identifier type for staff members.

use super::StaffDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a staff member, such as `staff-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    /// Creates a validated staff identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDomainError::EmptyStaffId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, StaffDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(StaffDomainError::EmptyStaffId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Creates a fresh random identifier for members registered without one.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StaffId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Staff member records and assignment snapshots.

use super::{StaffDomainError, StaffId};
use serde::{Deserialize, Serialize};

const NAME_LENGTH: std::ops::RangeInclusive<usize> = 2..=100;
const DEPARTMENT_LENGTH: std::ops::RangeInclusive<usize> = 2..=50;

/// A staff member known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    id: StaffId,
    name: String,
    email: String,
    department: String,
}

impl StaffMember {
    /// Creates a validated staff member record.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDomainError`] when the name, email or department fail
    /// validation.
    pub fn new(
        id: StaffId,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Result<Self, StaffDomainError> {
        let name = name.into().trim().to_owned();
        if !NAME_LENGTH.contains(&name.chars().count()) {
            return Err(StaffDomainError::InvalidName(name));
        }

        let email = email.into().trim().to_owned();
        if !is_plausible_email(&email) {
            return Err(StaffDomainError::InvalidEmail(email));
        }

        let department = department.into().trim().to_owned();
        if !DEPARTMENT_LENGTH.contains(&department.chars().count()) {
            return Err(StaffDomainError::InvalidDepartment(department));
        }

        Ok(Self {
            id,
            name,
            email,
            department,
        })
    }

    /// Returns the staff identifier.
    #[must_use]
    pub const fn id(&self) -> &StaffId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the identity snapshot copied onto tasks at assignment time.
    #[must_use]
    pub fn assignee(&self) -> StaffAssignee {
        StaffAssignee {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Point-in-time identity of an assignee.
///
/// Tasks keep this snapshot even if the directory record later changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffAssignee {
    id: StaffId,
    name: String,
}

impl StaffAssignee {
    /// Creates an assignee snapshot.
    #[must_use]
    pub fn new(id: StaffId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the staff identifier.
    #[must_use]
    pub const fn id(&self) -> &StaffId {
        &self.id
    }

    /// Returns the display name captured at assignment time.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}

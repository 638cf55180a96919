//! Configuration model.

use crate::task::services::ReassignmentGuard;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkforceConfig {
    /// Staff members registered in the directory at start-up.
    pub staff: Vec<StaffSeed>,
    /// Reassignment coordination settings.
    pub reassignment: ReassignmentConfig,
}

impl Default for WorkforceConfig {
    fn default() -> Self {
        Self {
            staff: StaffSeed::sample_roster(),
            reassignment: ReassignmentConfig::default(),
        }
    }
}

impl WorkforceConfig {
    /// Creates a configuration with no seeded staff.
    #[must_use]
    pub fn without_staff() -> Self {
        Self {
            staff: Vec::new(),
            ..Self::default()
        }
    }
}

/// A staff member to register at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaffSeed {
    /// Identifier; a UUID is generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Department.
    pub department: String,
}

impl StaffSeed {
    /// Creates a seed with an explicit identifier.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    /// Returns the default start-up roster.
    #[must_use]
    pub fn sample_roster() -> Vec<Self> {
        vec![
            Self::new("staff-1", "John Doe", "john.doe@company.com", "Sales"),
            Self::new("staff-2", "Jane Smith", "jane.smith@company.com", "Operations"),
            Self::new("staff-3", "Mike Johnson", "mike.johnson@company.com", "Sales"),
            Self::new("staff-4", "Sarah Wilson", "sarah.wilson@company.com", "Operations"),
        ]
    }
}

/// Reassignment coordination settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReassignmentConfig {
    /// How concurrent reassignments of one customer reference interact.
    pub guard: ReassignmentGuard,
}

//! Thread-safe in-memory staff directory.

use async_trait::async_trait;
use dashmap::{DashMap, mapref::entry::Entry};
use std::sync::Arc;

use crate::staff::{
    domain::{StaffAssignee, StaffId, StaffMember},
    ports::{StaffDirectory, StaffDirectoryError, StaffDirectoryResult},
};

/// In-memory staff directory keyed by staff identifier.
///
/// Besides the [`StaffDirectory`] lookup it exposes plain keyed CRUD used to
/// seed and maintain the roster.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStaffDirectory {
    members: Arc<DashMap<StaffId, StaffMember>>,
}

impl InMemoryStaffDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new staff member.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirectoryError::DuplicateStaff`] when the identifier is
    /// already registered.
    pub fn register(&self, member: StaffMember) -> StaffDirectoryResult<StaffMember> {
        match self.members.entry(member.id().clone()) {
            Entry::Occupied(occupied) => {
                Err(StaffDirectoryError::DuplicateStaff(occupied.key().clone()))
            }
            Entry::Vacant(vacant) => {
                vacant.insert(member.clone());
                Ok(member)
            }
        }
    }

    /// Replaces an existing staff member record.
    ///
    /// Tasks already assigned to the member keep their original name
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirectoryError::NotFound`] when the identifier is not
    /// registered.
    pub fn update(&self, member: StaffMember) -> StaffDirectoryResult<StaffMember> {
        let mut existing = self
            .members
            .get_mut(member.id())
            .ok_or_else(|| StaffDirectoryError::NotFound(member.id().clone()))?;
        *existing = member.clone();
        Ok(member)
    }

    /// Removes a staff member.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirectoryError::NotFound`] when the identifier is not
    /// registered.
    pub fn remove(&self, id: &StaffId) -> StaffDirectoryResult<StaffMember> {
        self.members
            .remove(id)
            .map(|(_, member)| member)
            .ok_or_else(|| StaffDirectoryError::NotFound(id.clone()))
    }

    /// Returns the staff member with the identifier, if any.
    #[must_use]
    pub fn get(&self, id: &StaffId) -> Option<StaffMember> {
        self.members.get(id).map(|entry| entry.value().clone())
    }

    /// Returns whether the identifier is registered.
    #[must_use]
    pub fn contains(&self, id: &StaffId) -> bool {
        self.members.contains_key(id)
    }

    /// Returns all staff members ordered by identifier.
    #[must_use]
    pub fn list(&self) -> Vec<StaffMember> {
        let mut members: Vec<StaffMember> = self
            .members
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        members.sort_by(|left, right| left.id().cmp(right.id()));
        members
    }
}

#[async_trait]
impl StaffDirectory for InMemoryStaffDirectory {
    async fn resolve(&self, id: &StaffId) -> StaffDirectoryResult<StaffAssignee> {
        self.members
            .get(id)
            .map(|entry| entry.value().assignee())
            .ok_or_else(|| StaffDirectoryError::NotFound(id.clone()))
    }
}

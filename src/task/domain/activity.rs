//! Append-only activity log recorded on each task.

use super::{ActivityId, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of change an activity entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityAction {
    /// The task was created, either directly or by reassignment.
    Created,
    /// The task was cancelled because its work moved to a new task.
    Cancelled,
    /// The status was changed explicitly.
    StatusChanged,
    /// The priority was changed.
    PriorityChanged,
    /// A comment was posted.
    CommentAdded,
}

impl ActivityAction {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Cancelled => "CANCELLED",
            Self::StatusChanged => "STATUS_CHANGED",
            Self::PriorityChanged => "PRIORITY_CHANGED",
            Self::CommentAdded => "COMMENT_ADDED",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User on whose behalf a change is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityActor {
    user_id: String,
    user_name: String,
}

impl ActivityActor {
    /// Creates an actor with distinct identifier and display name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyActor`] when either value is blank.
    pub fn new(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let user_id = user_id.into().trim().to_owned();
        let user_name = user_name.into().trim().to_owned();
        if user_id.is_empty() || user_name.is_empty() {
            return Err(TaskDomainError::EmptyActor);
        }
        Ok(Self { user_id, user_name })
    }

    /// Creates an actor known only by identifier, which doubles as the name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyActor`] when the identifier is blank.
    pub fn from_user_id(user_id: impl Into<String>) -> Result<Self, TaskDomainError> {
        let user_id = user_id.into();
        Self::new(user_id.clone(), user_id)
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the user display name.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}

/// Immutable audit record of a change to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    id: ActivityId,
    task_id: TaskId,
    user_id: String,
    user_name: String,
    action: ActivityAction,
    description: String,
    timestamp: DateTime<Utc>,
}

impl ActivityEntry {
    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the task the entry belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the acting user identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the acting user name.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Returns the recorded action.
    #[must_use]
    pub const fn action(&self) -> ActivityAction {
        self.action
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns when the entry was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Activity history of a task, kept in ascending timestamp order.
///
/// Sorting is stable, so entries recorded at the same instant keep their
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog(Vec<ActivityEntry>);

impl ActivityLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records a new entry stamped with the current clock time.
    ///
    /// Returns the identifier of the recorded entry.
    pub fn append(
        &mut self,
        task_id: TaskId,
        actor: &ActivityActor,
        action: ActivityAction,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> ActivityId {
        let entry = ActivityEntry {
            id: ActivityId::new(),
            task_id,
            user_id: actor.user_id().to_owned(),
            user_name: actor.user_name().to_owned(),
            action,
            description: description.into(),
            timestamp: clock.utc(),
        };
        let id = entry.id;
        self.0.push(entry);
        self.sort_chronologically();
        id
    }

    /// Re-sorts entries by timestamp. Returns `true` when the order changed.
    pub fn sort_chronologically(&mut self) -> bool {
        if self.is_chronological() {
            return false;
        }
        self.0.sort_by_key(ActivityEntry::timestamp);
        true
    }

    /// Returns whether entries are in non-decreasing timestamp order.
    #[must_use]
    pub fn is_chronological(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| matches!(pair, [earlier, later] if earlier.timestamp <= later.timestamp))
    }

    /// Returns the recorded entries.
    #[must_use]
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.0
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no entries have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the most recently recorded entry, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.0.last()
    }

    /// Iterates over entries oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, ActivityEntry> {
        self.0.iter()
    }

    /// Returns how many entries record the given action.
    #[must_use]
    pub fn count_of(&self, action: ActivityAction) -> usize {
        self.0.iter().filter(|entry| entry.action == action).count()
    }
}

impl<'a> IntoIterator for &'a ActivityLog {
    type Item = &'a ActivityEntry;
    type IntoIter = std::slice::Iter<'a, ActivityEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

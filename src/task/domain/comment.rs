//! Comments posted on tasks.

use super::{ActivityActor, CommentId, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Immutable comment attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    user_id: String,
    user_name: String,
    content: String,
    timestamp: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCommentContent`] when the content is
    /// blank.
    pub fn new(
        task_id: TaskId,
        author: &ActivityActor,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(TaskDomainError::EmptyCommentContent);
        }
        Ok(Self {
            id: CommentId::new(),
            task_id,
            user_id: author.user_id().to_owned(),
            user_name: author.user_name().to_owned(),
            content,
            timestamp: clock.utc(),
        })
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the task the comment belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author identifier.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the author name.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Returns the comment body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the comment was posted.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

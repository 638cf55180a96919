//! Task aggregate root.

use super::{
    ActivityAction, ActivityActor, ActivityLog, Comment, CommentId, CustomerReference,
    TaskDomainError, TaskId, TaskPriority, TaskStatus,
};
use crate::staff::domain::{StaffAssignee, StaffId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    assigned_staff_id: StaffId,
    assigned_staff_name: String,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: String,
    customer_reference: Option<CustomerReference>,
    activity_history: ActivityLog,
    comments: Vec<Comment>,
}

/// Parameter object for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Initial priority.
    pub priority: TaskPriority,
    /// Resolved assignee snapshot.
    pub assignee: StaffAssignee,
    /// First day of the work.
    pub start_date: NaiveDate,
    /// Day the work is due.
    pub due_date: NaiveDate,
    /// External correlation reference, if any.
    pub customer_reference: Option<CustomerReference>,
}

/// Replacement values for a verbatim task update.
///
/// Identity, creation time, activity history and comments are not part of
/// the update and always survive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    pub description: String,
    /// Replacement status.
    pub status: TaskStatus,
    /// Replacement priority.
    pub priority: TaskPriority,
    /// Replacement assignee identifier.
    pub assigned_staff_id: StaffId,
    /// Replacement assignee name.
    pub assigned_staff_name: String,
    /// Replacement start date.
    pub start_date: Option<NaiveDate>,
    /// Replacement due date.
    pub due_date: Option<NaiveDate>,
    /// Replacement creator identity.
    pub created_by: String,
    /// Replacement customer reference.
    pub customer_reference: Option<CustomerReference>,
}

impl TaskUpdate {
    /// Starts an update from the task's current values.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            assigned_staff_id: task.assigned_staff_id.clone(),
            assigned_staff_name: task.assigned_staff_name.clone(),
            start_date: task.start_date,
            due_date: task.due_date,
            created_by: task.created_by.clone(),
            customer_reference: task.customer_reference.clone(),
        }
    }
}

impl Task {
    /// Creates an active task and records its `CREATED` entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn create(
        draft: TaskDraft,
        creator: &ActivityActor,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let TaskDraft {
            title,
            description,
            priority,
            assignee,
            start_date,
            due_date,
            customer_reference,
        } = draft;
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let description_text = format!("Task created and assigned to {}", assignee.name());
        let mut task = Self::active(
            title,
            description,
            priority,
            assignee,
            (Some(start_date), Some(due_date)),
            creator,
            customer_reference,
            clock,
        );
        task.record(creator, ActivityAction::Created, description_text, clock);
        Ok(task)
    }

    /// Creates the replacement of a task handed over to a new assignee.
    ///
    /// The new task copies the work details and customer reference of
    /// `previous` but has a fresh identity, history and comment thread.
    #[must_use]
    pub fn reassigned_from(
        previous: &Self,
        assignee: StaffAssignee,
        actor: &ActivityActor,
        clock: &impl Clock,
    ) -> Self {
        let description_text = format!(
            "Task reassigned from {} to {}",
            previous.assigned_staff_name,
            assignee.name()
        );
        let mut task = Self::active(
            previous.title.clone(),
            previous.description.clone(),
            previous.priority,
            assignee,
            (previous.start_date, previous.due_date),
            actor,
            previous.customer_reference.clone(),
            clock,
        );
        task.record(actor, ActivityAction::Created, description_text, clock);
        task
    }

    #[expect(
        clippy::too_many_arguments,
        reason = "private constructor shared by both creation paths"
    )]
    fn active(
        title: String,
        description: String,
        priority: TaskPriority,
        assignee: StaffAssignee,
        (start_date, due_date): (Option<NaiveDate>, Option<NaiveDate>),
        creator: &ActivityActor,
        customer_reference: Option<CustomerReference>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            description,
            status: TaskStatus::Active,
            priority,
            assigned_staff_id: assignee.id().clone(),
            assigned_staff_name: assignee.name().to_owned(),
            start_date,
            due_date,
            created_at: timestamp,
            updated_at: timestamp,
            created_by: creator.user_id().to_owned(),
            customer_reference,
            activity_history: ActivityLog::new(),
            comments: Vec::new(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the assignee identifier captured at assignment time.
    #[must_use]
    pub const fn assigned_staff_id(&self) -> &StaffId {
        &self.assigned_staff_id
    }

    /// Returns the assignee name captured at assignment time.
    #[must_use]
    pub fn assigned_staff_name(&self) -> &str {
        &self.assigned_staff_name
    }

    /// Returns the start date, if set.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the due date, if set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the identity that created the task.
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Returns the customer reference, if any.
    #[must_use]
    pub const fn customer_reference(&self) -> Option<&CustomerReference> {
        self.customer_reference.as_ref()
    }

    /// Returns the activity history.
    #[must_use]
    pub const fn activity_history(&self) -> &ActivityLog {
        &self.activity_history
    }

    /// Returns the comments in posting order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Sets the status and records a `STATUS_CHANGED` entry.
    ///
    /// Any status may follow any other. Returns the previous status.
    pub fn change_status(
        &mut self,
        status: TaskStatus,
        actor: &ActivityActor,
        clock: &impl Clock,
    ) -> TaskStatus {
        let previous = self.status;
        self.status = status;
        self.touch(clock);
        self.record(
            actor,
            ActivityAction::StatusChanged,
            format!("Status changed from {previous} to {status}"),
            clock,
        );
        previous
    }

    /// Sets the priority and records a `PRIORITY_CHANGED` entry.
    ///
    /// Returns the previous priority.
    pub fn change_priority(
        &mut self,
        priority: TaskPriority,
        actor: &ActivityActor,
        clock: &impl Clock,
    ) -> TaskPriority {
        let previous = self.priority;
        self.priority = priority;
        self.touch(clock);
        self.record(
            actor,
            ActivityAction::PriorityChanged,
            format!("Priority changed from {previous} to {priority}"),
            clock,
        );
        previous
    }

    /// Cancels the task because its work moves to a replacement task.
    pub fn cancel_for_reassignment(&mut self, actor: &ActivityActor, clock: &impl Clock) {
        self.status = TaskStatus::Cancelled;
        self.touch(clock);
        self.record(
            actor,
            ActivityAction::Cancelled,
            "Task cancelled due to reassignment",
            clock,
        );
    }

    /// Posts a comment and records a `COMMENT_ADDED` entry quoting it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCommentContent`] when the content is
    /// blank. The task is unchanged in that case.
    pub fn add_comment(
        &mut self,
        author: &ActivityActor,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<CommentId, TaskDomainError> {
        let comment = Comment::new(self.id, author, content, clock)?;
        let comment_id = comment.id();
        let description = format!("Comment added: {}", comment.content());
        self.comments.push(comment);
        self.touch(clock);
        self.record(author, ActivityAction::CommentAdded, description, clock);
        Ok(comment_id)
    }

    /// Replaces every mutable detail with the update's values.
    ///
    /// No activity is recorded for verbatim updates.
    pub fn apply_update(&mut self, update: TaskUpdate, clock: &impl Clock) {
        let TaskUpdate {
            title,
            description,
            status,
            priority,
            assigned_staff_id,
            assigned_staff_name,
            start_date,
            due_date,
            created_by,
            customer_reference,
        } = update;
        self.title = title;
        self.description = description;
        self.status = status;
        self.priority = priority;
        self.assigned_staff_id = assigned_staff_id;
        self.assigned_staff_name = assigned_staff_name;
        self.start_date = start_date;
        self.due_date = due_date;
        self.created_by = created_by;
        self.customer_reference = customer_reference;
        self.touch(clock);
    }

    /// Sorts history and comments by timestamp. Returns `true` when either
    /// order changed.
    pub fn sort_chronologically(&mut self) -> bool {
        let history_changed = self.activity_history.sort_chronologically();
        let comments_sorted = self
            .comments
            .windows(2)
            .all(|pair| matches!(pair, [earlier, later] if earlier.timestamp() <= later.timestamp()));
        if !comments_sorted {
            self.comments.sort_by_key(Comment::timestamp);
        }
        history_changed || !comments_sorted
    }

    fn record(
        &mut self,
        actor: &ActivityActor,
        action: ActivityAction,
        description: impl Into<String>,
        clock: &impl Clock,
    ) {
        self.activity_history
            .append(self.id, actor, action, description, clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

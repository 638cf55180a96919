//! Task lifecycle engine: creation, mutation and dedup-safe reassignment.

use crate::{
    staff::{domain::StaffId, ports::StaffDirectory},
    task::{
        domain::{
            ActivityActor, CustomerReference, Task, TaskDraft, TaskId, TaskPriority, TaskStatus,
            TaskUpdate,
        },
        ports::{TaskRepository, TaskRepositoryError},
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{
    error::{TaskLifecycleError, TaskLifecycleResult},
    locks::KeyedLocks,
};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    priority: TaskPriority,
    assigned_staff_id: String,
    start_date: NaiveDate,
    due_date: NaiveDate,
    created_by: String,
    customer_reference: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        priority: TaskPriority,
        assigned_staff_id: impl Into<String>,
        start_date: NaiveDate,
        due_date: NaiveDate,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority,
            assigned_staff_id: assigned_staff_id.into(),
            start_date,
            due_date,
            created_by: created_by.into(),
            customer_reference: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the customer reference correlating successive task versions.
    #[must_use]
    pub fn with_customer_reference(mut self, reference: impl Into<String>) -> Self {
        self.customer_reference = Some(reference.into());
        self
    }
}

/// Request payload for moving customer work to a different staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignTaskRequest {
    customer_reference: String,
    new_staff_id: String,
    updated_by: String,
}

impl ReassignTaskRequest {
    /// Creates a reassignment request.
    #[must_use]
    pub fn new(
        customer_reference: impl Into<String>,
        new_staff_id: impl Into<String>,
        updated_by: impl Into<String>,
    ) -> Self {
        Self {
            customer_reference: customer_reference.into(),
            new_staff_id: new_staff_id.into(),
            updated_by: updated_by.into(),
        }
    }
}

/// Request payload for posting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommentRequest {
    user_id: String,
    user_name: String,
    content: String,
}

impl AddCommentRequest {
    /// Creates a comment request.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
            content: content.into(),
        }
    }
}

/// How concurrent reassignments of one customer reference are coordinated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReassignmentGuard {
    /// Reassignments of the same reference run one at a time and re-check
    /// the active task before cancelling it. At most one task per reference
    /// is ever active.
    #[default]
    PerReference,
    /// Reassignments scan and cancel without coordination. Two concurrent
    /// calls may both cancel the same task and leave two active
    /// replacements behind.
    Unguarded,
}

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<R, S, C>
where
    R: TaskRepository,
    S: StaffDirectory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    staff: Arc<S>,
    clock: Arc<C>,
    task_locks: Arc<KeyedLocks<TaskId>>,
    reference_locks: Arc<KeyedLocks<CustomerReference>>,
    reassignment_guard: ReassignmentGuard,
}

impl<R, S, C> Clone for TaskLifecycleService<R, S, C>
where
    R: TaskRepository,
    S: StaffDirectory,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            staff: Arc::clone(&self.staff),
            clock: Arc::clone(&self.clock),
            task_locks: Arc::clone(&self.task_locks),
            reference_locks: Arc::clone(&self.reference_locks),
            reassignment_guard: self.reassignment_guard,
        }
    }
}

impl<R, S, C> TaskLifecycleService<R, S, C>
where
    R: TaskRepository,
    S: StaffDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub fn new(repository: Arc<R>, staff: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            repository,
            staff,
            clock,
            task_locks: Arc::new(KeyedLocks::new()),
            reference_locks: Arc::new(KeyedLocks::new()),
            reassignment_guard: ReassignmentGuard::default(),
        }
    }

    /// Sets how concurrent reassignments are coordinated.
    #[must_use]
    pub const fn with_reassignment_guard(mut self, guard: ReassignmentGuard) -> Self {
        self.reassignment_guard = guard;
        self
    }

    /// Returns the configured reassignment coordination.
    #[must_use]
    pub const fn reassignment_guard(&self) -> ReassignmentGuard {
        self.reassignment_guard
    }

    #[cfg(test)]
    pub(crate) fn held_lock_count(&self) -> usize {
        self.task_locks.len() + self.reference_locks.len()
    }

    /// Creates an active task assigned to a staff member.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when input validation fails, the staff
    /// member does not exist, or the repository rejects persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            priority,
            assigned_staff_id,
            start_date,
            due_date,
            created_by,
            customer_reference,
        } = request;

        let creator = ActivityActor::from_user_id(created_by)?;
        let staff_id = StaffId::new(assigned_staff_id)?;
        let customer_reference = customer_reference
            .map(CustomerReference::new)
            .transpose()?;
        let assignee = self.staff.resolve(&staff_id).await?;

        let draft = TaskDraft {
            title,
            description,
            priority,
            assignee,
            start_date,
            due_date,
            customer_reference,
        };
        let task = Task::create(draft, &creator, &*self.clock)?;
        self.repository.store(&task).await?;

        info!(
            task_id = %task.id(),
            staff_id = %task.assigned_staff_id(),
            created_by = task.created_by(),
            "task created"
        );
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.find_or_not_found(id).await
    }

    /// Returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the scan fails.
    pub async fn list_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Replaces a task's details verbatim.
    ///
    /// Identity, creation time, history and comments are preserved and
    /// `updated_at` is bumped. No activity entry is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn update(&self, id: TaskId, update: TaskUpdate) -> TaskLifecycleResult<Task> {
        let clock = &*self.clock;
        let task = self
            .modify(id, move |task| {
                task.apply_update(update, clock);
                Ok(())
            })
            .await?;
        debug!(task_id = %id, "task replaced");
        Ok(task)
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let _guard = self.task_locks.lock(id).await;
        match self.repository.delete(id).await {
            Ok(()) => {
                info!(task_id = %id, "task deleted");
                Ok(())
            }
            Err(TaskRepositoryError::NotFound(missing)) => {
                Err(TaskLifecycleError::TaskNotFound(missing))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Moves the active task for a customer reference to a new staff member.
    ///
    /// The current active task is cancelled and a fresh active task with the
    /// same work details is created for the new assignee, so the reference
    /// never has two active tasks. Returns the new task.
    ///
    /// When several tasks are active for the reference the oldest is
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Staff`] when the new staff member does
    /// not exist, [`TaskLifecycleError::NoActiveTaskForReference`] when no
    /// active task carries the reference, or
    /// [`TaskLifecycleError::Repository`] when persistence fails. Nothing is
    /// changed on failure, except when the cancelled task cannot be restored
    /// either: that returns [`TaskLifecycleError::ReassignmentIncomplete`]
    /// and the reference is left without an active task.
    pub async fn reassign_by_customer_reference(
        &self,
        request: ReassignTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let ReassignTaskRequest {
            customer_reference,
            new_staff_id,
            updated_by,
        } = request;

        let reference = CustomerReference::new(customer_reference)?;
        let staff_id = StaffId::new(new_staff_id)?;
        let actor = ActivityActor::from_user_id(updated_by)?;
        let new_assignee = self.staff.resolve(&staff_id).await?;

        let _reference_guard = match self.reassignment_guard {
            ReassignmentGuard::PerReference => {
                Some(self.reference_locks.lock(reference.clone()).await)
            }
            ReassignmentGuard::Unguarded => None,
        };

        let candidate = self.find_active_for_reference(&reference).await?;
        let _task_guard = self.task_locks.lock(candidate.id()).await;
        let mut previous = match self.reassignment_guard {
            ReassignmentGuard::PerReference => self
                .repository
                .find_by_id(candidate.id())
                .await?
                .filter(|task| task.status() == TaskStatus::Active)
                .ok_or_else(|| TaskLifecycleError::NoActiveTaskForReference(reference.clone()))?,
            ReassignmentGuard::Unguarded => candidate,
        };

        let before_cancel = previous.clone();
        previous.cancel_for_reassignment(&actor, &*self.clock);
        let replacement = Task::reassigned_from(&previous, new_assignee, &actor, &*self.clock);

        self.repository.update(&previous).await?;
        if let Err(err) = self.repository.store(&replacement).await {
            warn!(
                task_id = %previous.id(),
                customer_reference = %reference,
                error = %err,
                "storing replacement task failed, restoring cancelled task"
            );
            if let Err(restore_err) = self.repository.update(&before_cancel).await {
                warn!(
                    task_id = %previous.id(),
                    customer_reference = %reference,
                    error = %restore_err,
                    "restoring cancelled task failed, reference has no active task"
                );
                return Err(TaskLifecycleError::ReassignmentIncomplete {
                    reference,
                    cancelled_task_id: previous.id(),
                    store: err,
                    restore: restore_err,
                });
            }
            return Err(err.into());
        }

        info!(
            customer_reference = %reference,
            cancelled_task_id = %previous.id(),
            task_id = %replacement.id(),
            from_staff = previous.assigned_staff_name(),
            to_staff = replacement.assigned_staff_name(),
            "task reassigned"
        );
        Ok(replacement)
    }

    /// Returns every task version that carried the customer reference,
    /// oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the reference is blank or
    /// [`TaskLifecycleError::Repository`] when the scan fails.
    pub async fn history_for_customer_reference(
        &self,
        customer_reference: &str,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let reference = CustomerReference::new(customer_reference)?;
        Ok(self
            .repository
            .find_by_customer_reference(&reference)
            .await?)
    }

    /// Sets a task's status.
    ///
    /// Any status may follow any other; the change is recorded as a
    /// `STATUS_CHANGED` activity entry naming the old and new values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist or [`TaskLifecycleError::Domain`] when `updated_by` is blank.
    pub async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        updated_by: impl Into<String>,
    ) -> TaskLifecycleResult<Task> {
        let actor = ActivityActor::from_user_id(updated_by)?;
        let clock = &*self.clock;
        let task = self
            .modify(id, |task| {
                let previous = task.change_status(status, &actor, clock);
                debug!(task_id = %id, from = %previous, to = %status, "task status changed");
                Ok(())
            })
            .await?;
        Ok(task)
    }

    /// Sets a task's priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist or [`TaskLifecycleError::Domain`] when `updated_by` is blank.
    pub async fn update_priority(
        &self,
        id: TaskId,
        priority: TaskPriority,
        updated_by: impl Into<String>,
    ) -> TaskLifecycleResult<Task> {
        let actor = ActivityActor::from_user_id(updated_by)?;
        let clock = &*self.clock;
        let task = self
            .modify(id, |task| {
                let previous = task.change_priority(priority, &actor, clock);
                debug!(task_id = %id, from = %previous, to = %priority, "task priority changed");
                Ok(())
            })
            .await?;
        Ok(task)
    }

    /// Posts a comment on a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist or [`TaskLifecycleError::Domain`] when the author or content is
    /// blank.
    pub async fn add_comment(
        &self,
        id: TaskId,
        request: AddCommentRequest,
    ) -> TaskLifecycleResult<Task> {
        let AddCommentRequest {
            user_id,
            user_name,
            content,
        } = request;
        let author = ActivityActor::new(user_id, user_name)?;
        let clock = &*self.clock;
        let task = self
            .modify(id, move |task| {
                let comment_id = task.add_comment(&author, content, clock)?;
                debug!(task_id = %id, %comment_id, "comment added");
                Ok(())
            })
            .await?;
        Ok(task)
    }

    /// Retrieves a task with history and comments in chronological order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn get_with_full_details(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let _guard = self.task_locks.lock(id).await;
        let mut task = self.find_or_not_found(id).await?;
        if task.sort_chronologically() {
            self.repository.update(&task).await?;
        }
        Ok(task)
    }

    async fn find_or_not_found(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(id))
    }

    async fn find_active_for_reference(
        &self,
        reference: &CustomerReference,
    ) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_customer_reference(reference)
            .await?
            .into_iter()
            .filter(|task| task.status() == TaskStatus::Active)
            .min_by(|left, right| {
                left.created_at()
                    .cmp(&right.created_at())
                    .then_with(|| left.id().cmp(&right.id()))
            })
            .ok_or_else(|| TaskLifecycleError::NoActiveTaskForReference(reference.clone()))
    }

    /// Loads, mutates and stores a task while holding its lock.
    ///
    /// The mutation runs on a copy, so a failing mutation leaves the stored
    /// task untouched.
    async fn modify(
        &self,
        id: TaskId,
        mutate: impl FnOnce(&mut Task) -> TaskLifecycleResult<()> + Send,
    ) -> TaskLifecycleResult<Task> {
        let _guard = self.task_locks.lock(id).await;
        let mut task = self.find_or_not_found(id).await?;
        mutate(&mut task)?;
        self.repository.update(&task).await?;
        Ok(task)
    }
}

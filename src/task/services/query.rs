//! Task query engine: working views over a store snapshot.

use crate::task::{
    domain::{DateRange, Task, TaskFilter, TaskPriority},
    ports::TaskRepository,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use super::error::TaskLifecycleResult;

/// Read-only query service over the task store.
///
/// Queries scan a point-in-time snapshot and keep the store's ordering.
pub struct TaskQueryService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskQueryService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskQueryService<R>
where
    R: TaskRepository,
{
    /// Creates a new query service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns non-cancelled tasks starting within the inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Domain`] when `start` is after
    /// `end`, or [`super::TaskLifecycleError::Repository`] when the scan
    /// fails.
    pub async fn by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let range = DateRange::new(start, end)?;
        self.matching(TaskFilter::DateRange(range)).await
    }

    /// Returns the smart daily view: non-cancelled tasks starting within the
    /// range, plus active tasks that started before it and are still open.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Domain`] when `start` is after
    /// `end`, or [`super::TaskLifecycleError::Repository`] when the scan
    /// fails.
    pub async fn smart_daily(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let range = DateRange::new(start, end)?;
        self.matching(TaskFilter::SmartDaily(range)).await
    }

    /// Returns non-cancelled tasks with the given priority.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Repository`] when the scan
    /// fails.
    pub async fn by_priority(&self, priority: TaskPriority) -> TaskLifecycleResult<Vec<Task>> {
        self.matching(TaskFilter::Priority(priority)).await
    }

    /// Returns tasks matching an arbitrary filter.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Repository`] when the scan
    /// fails.
    pub async fn matching(&self, filter: TaskFilter) -> TaskLifecycleResult<Vec<Task>> {
        let tasks: Vec<Task> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(|task| filter.matches(task))
            .collect();
        debug!(?filter, matched = tasks.len(), "task query evaluated");
        Ok(tasks)
    }
}

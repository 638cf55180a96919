//! Query predicates over tasks.
//!
//! Every filter excludes cancelled tasks: cancelled work is history, never
//! part of a working view.

use super::{Task, TaskDomainError, TaskPriority, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates an inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvertedDateRange`] when `start` is after
    /// `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TaskDomainError> {
        if start > end {
            return Err(TaskDomainError::InvertedDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering a single day.
    #[must_use]
    pub const fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end(self) -> NaiveDate {
        self.end
    }

    /// Returns whether the day lies within the range.
    #[must_use]
    pub fn contains(self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Predicate selecting tasks for a working view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    /// Tasks starting within the range.
    DateRange(DateRange),
    /// Tasks starting within the range plus active work carried over from
    /// before it.
    SmartDaily(DateRange),
    /// Tasks with the given priority.
    Priority(TaskPriority),
}

impl TaskFilter {
    /// Returns whether the task belongs in the view.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        if task.status().is_cancelled() {
            return false;
        }
        match self {
            Self::DateRange(range) => task.start_date().is_some_and(|day| range.contains(day)),
            Self::SmartDaily(range) => task.start_date().is_some_and(|day| {
                range.contains(day)
                    || (day < range.start() && task.status() == TaskStatus::Active)
            }),
            Self::Priority(priority) => task.priority() == priority,
        }
    }
}

//! In-memory task repository.

use async_trait::async_trait;
use dashmap::{DashMap, mapref::entry::Entry};
use std::sync::Arc;

use crate::task::{
    domain::{CustomerReference, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks live in a sharded concurrent map, so writers to different tasks do
/// not contend on a single lock. Scans clone entries shard by shard and
/// never hold a guard across a write.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<DashMap<TaskId, Task>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether no tasks are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn snapshot(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        tasks.sort_by(|left, right| {
            left.created_at()
                .cmp(&right.created_at())
                .then_with(|| left.id().cmp(&right.id()))
        });
        tasks
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        match self.tasks.entry(task.id()) {
            Entry::Occupied(_) => Err(TaskRepositoryError::DuplicateTask(task.id())),
            Entry::Vacant(vacant) => {
                vacant.insert(task.clone());
                Ok(())
            }
        }
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut existing = self
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *existing = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Ok(self.tasks.get(&id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.snapshot(|_| true))
    }

    async fn find_by_customer_reference(
        &self,
        reference: &CustomerReference,
    ) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.snapshot(|task| task.customer_reference() == Some(reference)))
    }
}

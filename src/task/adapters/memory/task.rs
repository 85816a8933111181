//! In-memory repository for task lifecycle storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, PageRequest, PersistedTaskData, Task, TaskFilter, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned from a sequence starting at 1, and records are
/// kept in identifier order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    rows: BTreeMap<TaskId, PersistedTaskData>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn modify_row(
        &self,
        id: TaskId,
        change: impl FnOnce(&mut PersistedTaskData),
    ) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let row = state
            .rows
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        change(row);
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.rows.get(&id).cloned().map(Task::from_persisted))
    }

    async fn search_all_by_filter(
        &self,
        filter: &TaskFilter,
        page: PageRequest,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(state
            .rows
            .values()
            .cloned()
            .map(Task::from_persisted)
            .filter(|task| filter.matches(task))
            .skip(skip)
            .take(take)
            .collect())
    }

    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let next_id = state.last_id + 1;
        let id = TaskId::new(next_id).map_err(TaskRepositoryError::persistence)?;
        let stored = task.clone().into_task(id);
        state.rows.insert(id, PersistedTaskData::from(&stored));
        state.last_id = next_id;
        Ok(stored)
    }

    async fn replace(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.modify_row(task.id(), |row| *row = PersistedTaskData::from(task))
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let state = self.read()?;
        Ok(state.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn set_status(&self, id: TaskId, status: TaskStatus) -> TaskRepositoryResult<()> {
        self.modify_row(id, |row| row.status = status)
    }

    async fn set_status_and_done_at(
        &self,
        id: TaskId,
        status: TaskStatus,
        done_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        self.modify_row(id, |row| {
            row.status = status;
            row.done_at = Some(done_at);
        })
    }

    async fn count_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<u64> {
        let state = self.read()?;
        let count = state
            .rows
            .values()
            .filter(|row| row.status == status)
            .count();
        u64::try_from(count).map_err(TaskRepositoryError::persistence)
    }
}

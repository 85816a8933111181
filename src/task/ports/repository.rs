//! Repository port for task persistence and lookup.
//!
//! Implementations store records as given and never apply business rules;
//! every lifecycle decision is made by the task services before a call
//! reaches the store.

use crate::task::domain::{NewTask, PageRequest, Task, TaskFilter, TaskId, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns tasks matching `filter`, ordered by identifier ascending and
    /// restricted to the `page` window.
    ///
    /// Paging fields inside `filter` are ignored; `page` is authoritative.
    async fn search_all_by_filter(
        &self,
        filter: &TaskFilter,
        page: PageRequest,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Inserts a new task and returns it with its assigned identifier.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Replaces every stored field of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn replace(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns whether a task with the identifier exists.
    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Overwrites only the status of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn set_status(&self, id: TaskId, status: TaskStatus) -> TaskRepositoryResult<()>;

    /// Overwrites the status and completion timestamp of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn set_status_and_done_at(
        &self,
        id: TaskId,
        status: TaskStatus,
        done_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()>;

    /// Counts tasks currently in `status`.
    async fn count_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

//! Service layer for task creation, update, lookup and workflow transitions.

use super::TaskLifecycleConfig;
use crate::task::{
    domain::{
        ErrorKind, PageRequest, Task, TaskDomainError, TaskDraft, TaskFilter, TaskId, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// Starting another task would exceed the in-progress ceiling.
    #[error("count of tasks with status IN_PROGRESS must not exceed {limit} (currently {current})")]
    InProgressLimitReached {
        /// Configured admission ceiling.
        limit: u64,
        /// Number of in-progress tasks observed at check time.
        current: u64,
    },
}

impl TaskLifecycleError {
    /// Returns the abstract error kind for this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::Repository(TaskRepositoryError::Persistence(_)) => ErrorKind::Internal,
            Self::InProgressLimitReached { .. } => ErrorKind::Conflict,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Domain rules live on [`Task`] and [`TaskDraft`]; this service loads the
/// current snapshot, applies the rule, enforces admission control, and
/// persists the result.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: TaskLifecycleConfig,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            config: self.config,
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service with default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, TaskLifecycleConfig::default())
    }

    /// Creates a new task lifecycle service with explicit configuration.
    #[must_use]
    pub const fn with_config(
        repository: Arc<R>,
        clock: Arc<C>,
        config: TaskLifecycleConfig,
    ) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    async fn find_task_or_error(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        debug!(task_id = %id, "fetching task");
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!(task_id = %id, "task not found");
            TaskLifecycleError::NotFound(id)
        })
    }

    /// Lists tasks matching `filter`, ordered by identifier.
    ///
    /// Missing paging fields fall back to the configured defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPageSize`] for a zero page size, or
    /// persistence errors from the repository.
    pub async fn search_all_by_filter(
        &self,
        filter: &TaskFilter,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let page = PageRequest::new(
            filter.page_size.unwrap_or(self.config.default_page_size()),
            filter.page_number.unwrap_or(self.config.default_page_number()),
        )?;
        debug!(offset = page.offset(), limit = page.limit(), "searching tasks by filter");
        let tasks = self.repository.search_all_by_filter(filter, page).await?;
        debug!(count = tasks.len(), "found tasks");
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or persistence errors from the repository.
    pub async fn get_by_id(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.find_task_or_error(id).await
    }

    /// Creates a task from a caller-supplied draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the draft is invalid for
    /// creation, or persistence errors from the repository.
    pub async fn create(&self, draft: TaskDraft) -> TaskLifecycleResult<Task> {
        info!("creating task");
        let new_task = draft.into_new_task(&*self.clock)?;
        let created = self.repository.insert(&new_task).await?;
        info!(task_id = %created.id(), "task created");
        Ok(created)
    }

    /// Replaces the editable fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::Domain`] when the update is not permitted, or
    /// persistence errors from the repository.
    pub async fn update(&self, id: TaskId, draft: TaskDraft) -> TaskLifecycleResult<Task> {
        info!(task_id = %id, "updating task");
        let existing = self.find_task_or_error(id).await?;
        let updated = existing.apply_update(&draft)?;
        self.repository.replace(&updated).await?;
        info!(task_id = %id, "task updated");
        Ok(updated)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or persistence errors from the repository.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        info!(task_id = %id, "deleting task");
        if !self.repository.exists_by_id(id).await? {
            warn!(task_id = %id, "task not found");
            return Err(TaskLifecycleError::NotFound(id));
        }
        self.repository.delete_by_id(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Starts a `CREATED` task.
    ///
    /// The in-progress count is read from the repository on every call and
    /// is not locked, so concurrent starts may admit one task beyond the
    /// ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::Domain`] for a wrong status or missing executor,
    /// [`TaskLifecycleError::InProgressLimitReached`] when the ceiling is
    /// exceeded, or persistence errors from the repository.
    pub async fn start(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        info!(task_id = %id, "starting task");
        let existing = self.find_task_or_error(id).await?;
        let started = existing.start()?;

        let limit = self.config.max_tasks_in_progress();
        let current = self
            .repository
            .count_by_status(TaskStatus::InProgress)
            .await?;
        if current > limit {
            warn!(task_id = %id, current, limit, "in-progress ceiling exceeded");
            return Err(TaskLifecycleError::InProgressLimitReached { limit, current });
        }

        self.repository.set_status(id, started.status()).await?;
        info!(task_id = %id, "task started");
        Ok(started)
    }

    /// Completes an `IN_PROGRESS` task and records the completion time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::Domain`] for a wrong status, or persistence
    /// errors from the repository.
    pub async fn complete(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        info!(task_id = %id, "completing task");
        let existing = self.find_task_or_error(id).await?;
        let done_at = self.clock.utc();
        let completed = existing.complete_at(done_at)?;
        self.repository
            .set_status_and_done_at(id, completed.status(), done_at)
            .await?;
        info!(task_id = %id, "task completed");
        Ok(completed)
    }

    /// Resumes a `DONE` task, keeping its last completion time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::Domain`] for a wrong status, or persistence
    /// errors from the repository.
    pub async fn resume(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        info!(task_id = %id, "resuming task");
        let existing = self.find_task_or_error(id).await?;
        let resumed = existing.resume()?;
        self.repository.set_status(id, resumed.status()).await?;
        info!(task_id = %id, "task resumed");
        Ok(resumed)
    }
}

//! Task aggregate root and its lifecycle transitions.
//!
//! Every operation that changes a task returns a new [`Task`] snapshot and
//! leaves the receiver untouched, so callers never observe a half-applied
//! change.

use super::{TaskDomainError, TaskDraft, TaskId, TaskPriority, TaskStatus, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    creator_id: UserId,
    assigned_user_id: Option<UserId>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    deadline_date: Option<NaiveDate>,
    done_at: Option<DateTime<Utc>>,
    priority: TaskPriority,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted creator identifier.
    pub creator_id: UserId,
    /// Persisted executor identifier, if any.
    pub assigned_user_id: Option<UserId>,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted deadline, if any.
    pub deadline_date: Option<NaiveDate>,
    /// Persisted latest completion timestamp, if any.
    pub done_at: Option<DateTime<Utc>>,
    /// Persisted priority.
    pub priority: TaskPriority,
}

impl From<&Task> for PersistedTaskData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            creator_id: task.creator_id,
            assigned_user_id: task.assigned_user_id,
            status: task.status,
            created_at: task.created_at,
            deadline_date: task.deadline_date,
            done_at: task.done_at,
            priority: task.priority,
        }
    }
}

/// Validated task that has not been assigned an identifier yet.
///
/// Produced by [`TaskDraft::into_new_task`]; the store assigns the identifier
/// and returns the stored [`Task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    creator_id: UserId,
    assigned_user_id: Option<UserId>,
    created_at: DateTime<Utc>,
    deadline_date: Option<NaiveDate>,
    priority: TaskPriority,
}

impl NewTask {
    pub(super) const fn new(
        creator_id: UserId,
        assigned_user_id: Option<UserId>,
        created_at: DateTime<Utc>,
        deadline_date: Option<NaiveDate>,
        priority: TaskPriority,
    ) -> Self {
        Self {
            creator_id,
            assigned_user_id,
            created_at,
            deadline_date,
            priority,
        }
    }

    /// Returns the creator identifier.
    #[must_use]
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }

    /// Returns the executor identifier, if any.
    #[must_use]
    pub const fn assigned_user_id(&self) -> Option<UserId> {
        self.assigned_user_id
    }

    /// Returns the initial status, which is always [`TaskStatus::Created`].
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::Created
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Builds the stored task once the store has assigned `id`.
    #[must_use]
    pub const fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            creator_id: self.creator_id,
            assigned_user_id: self.assigned_user_id,
            status: TaskStatus::Created,
            created_at: self.created_at,
            deadline_date: self.deadline_date,
            done_at: None,
            priority: self.priority,
        }
    }
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            creator_id: data.creator_id,
            assigned_user_id: data.assigned_user_id,
            status: data.status,
            created_at: data.created_at,
            deadline_date: data.deadline_date,
            done_at: data.done_at,
            priority: data.priority,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the creator identifier.
    #[must_use]
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }

    /// Returns the executor identifier, if any.
    #[must_use]
    pub const fn assigned_user_id(&self) -> Option<UserId> {
        self.assigned_user_id
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline_date
    }

    /// Returns the latest completion timestamp.
    ///
    /// Resuming a task keeps this value; it records when the task was last
    /// completed rather than whether it is complete now.
    #[must_use]
    pub const fn done_at(&self) -> Option<DateTime<Utc>> {
        self.done_at
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the calendar date on which the task was created.
    #[must_use]
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Merges editable fields from `draft` into a new snapshot.
    ///
    /// Identifier, status and timestamps are carried over from `self`;
    /// creator, executor and deadline are taken from the draft as given. A
    /// missing draft priority keeps the current priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DoneTaskIsImmutable`] for `DONE` tasks,
    /// [`TaskDomainError::ExecutorRequired`] when an in-progress task would
    /// lose its executor, [`TaskDomainError::DeadlineBeforeCreation`] for a
    /// deadline before the creation date, and
    /// [`TaskDomainError::CreatorIdRequired`] when the draft has no creator.
    pub fn apply_update(&self, draft: &TaskDraft) -> Result<Self, TaskDomainError> {
        if !self.status.accepts_updates() {
            return Err(TaskDomainError::DoneTaskIsImmutable(self.id));
        }
        if self.status.requires_executor() && draft.assigned_user_id().is_none() {
            return Err(TaskDomainError::ExecutorRequired {
                task_id: self.id,
                status: self.status,
            });
        }
        let created_on = self.created_on();
        if let Some(deadline) = draft.deadline_date()
            && deadline < created_on
        {
            return Err(TaskDomainError::DeadlineBeforeCreation {
                deadline,
                created_on,
            });
        }
        let creator_id = draft
            .creator_id()
            .ok_or(TaskDomainError::CreatorIdRequired)?;

        Ok(Self {
            creator_id,
            assigned_user_id: draft.assigned_user_id(),
            deadline_date: draft.deadline_date(),
            priority: draft.priority().unwrap_or(self.priority),
            ..self.clone()
        })
    }

    /// Moves a `CREATED` task to `IN_PROGRESS`.
    ///
    /// Admission control against the in-progress ceiling needs store state
    /// and is enforced by the lifecycle service, not here.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] unless the task is
    /// `CREATED`, or [`TaskDomainError::ExecutorRequired`] when no executor is
    /// assigned.
    pub fn start(&self) -> Result<Self, TaskDomainError> {
        self.ensure_transition(TaskStatus::Created, TaskStatus::InProgress)?;
        if self.assigned_user_id.is_none() {
            return Err(TaskDomainError::ExecutorRequired {
                task_id: self.id,
                status: TaskStatus::InProgress,
            });
        }
        Ok(self.with_status(TaskStatus::InProgress))
    }

    /// Moves an `IN_PROGRESS` task to `DONE`, recording `done_at` as the
    /// completion time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] unless the task is
    /// `IN_PROGRESS`.
    pub fn complete_at(&self, done_at: DateTime<Utc>) -> Result<Self, TaskDomainError> {
        self.ensure_transition(TaskStatus::InProgress, TaskStatus::Done)?;
        Ok(Self {
            done_at: Some(done_at),
            ..self.with_status(TaskStatus::Done)
        })
    }

    /// Moves a `DONE` task back to `IN_PROGRESS`, keeping its completion time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] unless the task is
    /// `DONE`.
    pub fn resume(&self) -> Result<Self, TaskDomainError> {
        self.ensure_transition(TaskStatus::Done, TaskStatus::InProgress)?;
        Ok(self.with_status(TaskStatus::InProgress))
    }

    /// Checks that the task sits in `expected` and that the workflow allows
    /// moving on to `target`.
    fn ensure_transition(
        &self,
        expected: TaskStatus,
        target: TaskStatus,
    ) -> Result<(), TaskDomainError> {
        if self.status != expected || !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStateTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        Ok(())
    }

    fn with_status(&self, status: TaskStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

//! Caller-supplied task fields for creation and update.

use super::{NewTask, TaskDomainError, TaskPriority, TaskStatus, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;

/// Unvalidated task fields as supplied by a caller.
///
/// The same shape serves creation and update. Fields the lifecycle engine
/// owns (`id`, `status`, creation time) are rejected on creation and ignored
/// on update. The identifier is kept raw so that any supplied value, valid
/// or not, is reported as present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    id: Option<i64>,
    creator_id: Option<UserId>,
    assigned_user_id: Option<UserId>,
    status: Option<TaskStatus>,
    created_at: Option<DateTime<Utc>>,
    deadline_date: Option<NaiveDate>,
    priority: Option<TaskPriority>,
}

impl TaskDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw task identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<Option<i64>>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the creator identifier.
    #[must_use]
    pub fn with_creator(mut self, creator_id: impl Into<Option<UserId>>) -> Self {
        self.creator_id = creator_id.into();
        self
    }

    /// Sets the executor identifier.
    #[must_use]
    pub fn with_assignee(mut self, assigned_user_id: impl Into<Option<UserId>>) -> Self {
        self.assigned_user_id = assigned_user_id.into();
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<Option<TaskStatus>>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<Option<DateTime<Utc>>>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline_date: impl Into<Option<NaiveDate>>) -> Self {
        self.deadline_date = deadline_date.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<Option<TaskPriority>>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Returns the supplied identifier, if any.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// Returns the supplied creator identifier, if any.
    #[must_use]
    pub const fn creator_id(&self) -> Option<UserId> {
        self.creator_id
    }

    /// Returns the supplied executor identifier, if any.
    #[must_use]
    pub const fn assigned_user_id(&self) -> Option<UserId> {
        self.assigned_user_id
    }

    /// Returns the supplied status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the supplied creation timestamp, if any.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the supplied deadline, if any.
    #[must_use]
    pub const fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline_date
    }

    /// Returns the supplied priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Validates the draft for creation and stamps engine-owned fields.
    ///
    /// The resulting task is `CREATED`, created at the clock's current time,
    /// and defaults to [`TaskPriority::Medium`].
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument [`TaskDomainError`] when the draft carries
    /// an id, status or creation time, lacks a creator, or has a deadline
    /// before today.
    pub fn into_new_task(self, clock: &impl Clock) -> Result<NewTask, TaskDomainError> {
        if let Some(id) = self.id {
            return Err(TaskDomainError::IdMustBeAbsent(id));
        }
        let creator_id = self.creator_id.ok_or(TaskDomainError::CreatorIdRequired)?;
        if let Some(status) = self.status {
            return Err(TaskDomainError::StatusMustBeAbsent(status));
        }
        if self.created_at.is_some() {
            return Err(TaskDomainError::CreateDateTimeMustBeAbsent);
        }

        let now = clock.utc();
        let today = now.date_naive();
        if let Some(deadline) = self.deadline_date
            && deadline < today
        {
            return Err(TaskDomainError::DeadlineBeforeToday { deadline, today });
        }

        Ok(NewTask::new(
            creator_id,
            self.assigned_user_id,
            now,
            self.deadline_date,
            self.priority.unwrap_or_default(),
        ))
    }
}

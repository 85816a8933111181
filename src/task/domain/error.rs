//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use chrono::NaiveDate;
use thiserror::Error;

/// Abstract classification of lifecycle failures.
///
/// Request surfaces translate these kinds into transport-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The referenced task does not exist.
    NotFound,
    /// Input field values are malformed or logically inconsistent.
    InvalidArgument,
    /// The operation is not permitted in the task's current state.
    Conflict,
    /// Unexpected failure not attributable to caller input.
    Internal,
}

/// Errors returned while validating task values and transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// Task identifiers must be positive.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// A new task must not carry an identifier; the store assigns one.
    #[error("task id must be empty on creation, got {0}")]
    IdMustBeAbsent(i64),

    /// Every stored task needs a creator.
    #[error("task creator id is required")]
    CreatorIdRequired,

    /// A new task always starts as `CREATED`; callers cannot choose.
    #[error("task status must be empty on creation, got {0}")]
    StatusMustBeAbsent(TaskStatus),

    /// The creation timestamp is stamped by the lifecycle engine.
    #[error("task creation date time must be empty on creation")]
    CreateDateTimeMustBeAbsent,

    /// The deadline precedes the current calendar date.
    #[error("task deadline date {deadline} must not be before today ({today})")]
    DeadlineBeforeToday {
        /// Requested deadline.
        deadline: NaiveDate,
        /// Calendar date at validation time.
        today: NaiveDate,
    },

    /// The deadline precedes the task's creation date.
    #[error("task deadline date {deadline} must not be before task creation date {created_on}")]
    DeadlineBeforeCreation {
        /// Requested deadline.
        deadline: NaiveDate,
        /// Calendar date on which the task was created.
        created_on: NaiveDate,
    },

    /// Tasks in `DONE` cannot be modified.
    #[error("cannot modify task {0}: status = DONE")]
    DoneTaskIsImmutable(TaskId),

    /// The task has no assigned executor but its state requires one.
    #[error("task {task_id} with status {status} must have an executor")]
    ExecutorRequired {
        /// Task identifier.
        task_id: TaskId,
        /// Status that requires (or is about to require) an executor.
        status: TaskStatus,
    },

    /// The requested state-machine edge does not exist.
    #[error("cannot move task {task_id} from {from} to {to}")]
    InvalidStateTransition {
        /// Task identifier.
        task_id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// Page sizes must be at least one.
    #[error("page size must be greater than zero")]
    InvalidPageSize,
}

impl TaskDomainError {
    /// Returns the abstract error kind for this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTaskId(_)
            | Self::IdMustBeAbsent(_)
            | Self::CreatorIdRequired
            | Self::StatusMustBeAbsent(_)
            | Self::CreateDateTimeMustBeAbsent
            | Self::DeadlineBeforeToday { .. }
            | Self::DeadlineBeforeCreation { .. }
            | Self::InvalidPageSize => ErrorKind::InvalidArgument,
            Self::DoneTaskIsImmutable(_)
            | Self::ExecutorRequired { .. }
            | Self::InvalidStateTransition { .. } => ErrorKind::Conflict,
        }
    }
}

/// Error returned while parsing task statuses from persistence or transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence or transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

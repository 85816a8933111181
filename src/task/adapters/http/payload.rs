//! JSON payload types for the task HTTP surface.

use crate::task::domain::{
    Task, TaskDraft, TaskFilter, TaskId, TaskPriority, TaskStatus, UserId,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Request body for task creation and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    /// Task identifier; must be empty on creation and is ignored on update.
    #[serde(default)]
    pub id: Option<i64>,
    /// Creator identifier.
    #[serde(default)]
    pub creator_id: Option<UserId>,
    /// Executor identifier.
    #[serde(default)]
    pub assigned_user_id: Option<UserId>,
    /// Status; must be empty on creation and is ignored on update.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Creation time; must be empty on creation and is ignored on update.
    #[serde(default)]
    pub create_date_time: Option<DateTime<Utc>>,
    /// Deadline.
    #[serde(default)]
    pub deadline_date: Option<NaiveDate>,
    /// Priority.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
}

impl From<TaskRequest> for TaskDraft {
    fn from(request: TaskRequest) -> Self {
        Self::new()
            .with_id(request.id)
            .with_creator(request.creator_id)
            .with_assignee(request.assigned_user_id)
            .with_status(request.status)
            .with_created_at(request.create_date_time)
            .with_deadline(request.deadline_date)
            .with_priority(request.priority)
    }
}

/// Task representation returned by every task endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: TaskId,
    /// Creator identifier.
    pub creator_id: UserId,
    /// Executor identifier.
    pub assigned_user_id: Option<UserId>,
    /// Workflow status.
    pub status: TaskStatus,
    /// Creation time.
    pub create_date_time: DateTime<Utc>,
    /// Deadline.
    pub deadline_date: Option<NaiveDate>,
    /// Latest completion time.
    pub done_date_time: Option<DateTime<Utc>>,
    /// Priority.
    pub priority: TaskPriority,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id(),
            creator_id: task.creator_id(),
            assigned_user_id: task.assigned_user_id(),
            status: task.status(),
            create_date_time: task.created_at(),
            deadline_date: task.deadline_date(),
            done_date_time: task.done_at(),
            priority: task.priority(),
        }
    }
}

/// Query string accepted by the task listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    /// Filter by creator.
    pub creator_id: Option<i64>,
    /// Filter by executor.
    pub assigned_user_id: Option<i64>,
    /// Filter by status.
    pub status: Option<TaskStatus>,
    /// Filter by priority.
    pub priority: Option<TaskPriority>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Zero-based page number.
    pub page_number: Option<u32>,
}

impl From<TaskQuery> for TaskFilter {
    fn from(query: TaskQuery) -> Self {
        Self {
            creator_id: query.creator_id.map(UserId::new),
            assigned_user_id: query.assigned_user_id.map(UserId::new),
            status: query.status,
            priority: query.priority,
            page_size: query.page_size,
            page_number: query.page_number,
        }
    }
}

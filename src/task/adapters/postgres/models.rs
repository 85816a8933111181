//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Creator identifier.
    pub creator_id: i64,
    /// Executor identifier.
    pub assigned_user_id: Option<i64>,
    /// Workflow status.
    pub status: String,
    /// Creation timestamp.
    pub create_date_time: DateTime<Utc>,
    /// Deadline.
    pub deadline_date: Option<NaiveDate>,
    /// Latest completion timestamp.
    pub done_date_time: Option<DateTime<Utc>>,
    /// Priority.
    pub priority: String,
}

/// Insert model for task records; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Creator identifier.
    pub creator_id: i64,
    /// Executor identifier.
    pub assigned_user_id: Option<i64>,
    /// Workflow status.
    pub status: String,
    /// Creation timestamp.
    pub create_date_time: DateTime<Utc>,
    /// Deadline.
    pub deadline_date: Option<NaiveDate>,
    /// Priority.
    pub priority: String,
}

/// Full-replace changeset; `None` values overwrite columns with `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Creator identifier.
    pub creator_id: i64,
    /// Executor identifier.
    pub assigned_user_id: Option<i64>,
    /// Workflow status.
    pub status: String,
    /// Creation timestamp.
    pub create_date_time: DateTime<Utc>,
    /// Deadline.
    pub deadline_date: Option<NaiveDate>,
    /// Latest completion timestamp.
    pub done_date_time: Option<DateTime<Utc>>,
    /// Priority.
    pub priority: String,
}

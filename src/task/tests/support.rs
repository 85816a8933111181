//! Shared fixtures for task unit tests.

use crate::task::domain::{PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus, UserId};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Instant used as "now" across unit tests: 2026-10-19 09:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("fixed instant must be unambiguous"))
}

/// Builds a calendar date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid date {year}-{month}-{day}"))
}

/// Builds a task identifier, panicking on invalid input.
pub fn task_id(value: i64) -> TaskId {
    TaskId::new(value).unwrap_or_else(|err| panic!("invalid task id: {err}"))
}

/// Builds a stored task in `status`, created at [`now`] by user 1.
pub fn stored_task(status: TaskStatus, assignee: Option<i64>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: task_id(1),
        creator_id: UserId::new(1),
        assigned_user_id: assignee.map(UserId::new),
        status,
        created_at: now(),
        deadline_date: None,
        done_at: None,
        priority: TaskPriority::Medium,
    })
}

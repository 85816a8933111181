//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDraft, TaskId, UserId},
    services::TaskLifecycleService,
};

/// Service type backed by the in-memory store and the system clock.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a lifecycle service over a fresh in-memory repository.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Returns the UTC calendar date `days` away from today.
pub fn days_from_today(days: i64) -> NaiveDate {
    let today = Utc::now().date_naive();
    let offset = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        today.checked_add_days(offset)
    } else {
        today.checked_sub_days(offset)
    };
    shifted.unwrap_or_else(|| panic!("date {days} days from today is out of range"))
}

/// Builds a valid creation draft for `creator` with an optional executor.
pub fn draft(creator: i64, assignee: Option<i64>) -> TaskDraft {
    TaskDraft::new()
        .with_creator(UserId::new(creator))
        .with_assignee(assignee.map(UserId::new))
}

/// Builds a task identifier, panicking on invalid input.
pub fn task_id(value: i64) -> TaskId {
    TaskId::new(value).unwrap_or_else(|err| panic!("invalid task id: {err}"))
}

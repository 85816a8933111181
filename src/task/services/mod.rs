//! Application services for task lifecycle orchestration.

mod config;
mod lifecycle;

pub use config::{
    DEFAULT_MAX_TASKS_IN_PROGRESS, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, TaskLifecycleConfig,
};
pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};

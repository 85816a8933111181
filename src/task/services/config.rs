//! Tunables for the task lifecycle service.

/// Default ceiling on simultaneously in-progress tasks.
pub const DEFAULT_MAX_TASKS_IN_PROGRESS: u64 = 5;
/// Default page size for task listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Default zero-based page number for task listings.
pub const DEFAULT_PAGE_NUMBER: u32 = 0;

/// Task lifecycle service configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLifecycleConfig {
    max_tasks_in_progress: u64,
    default_page_size: u32,
    default_page_number: u32,
}

impl Default for TaskLifecycleConfig {
    fn default() -> Self {
        Self {
            max_tasks_in_progress: DEFAULT_MAX_TASKS_IN_PROGRESS,
            default_page_size: DEFAULT_PAGE_SIZE,
            default_page_number: DEFAULT_PAGE_NUMBER,
        }
    }
}

impl TaskLifecycleConfig {
    /// Sets the admission ceiling checked when a task is started.
    #[must_use]
    pub const fn with_max_tasks_in_progress(mut self, limit: u64) -> Self {
        self.max_tasks_in_progress = limit;
        self
    }

    /// Sets the page size used when a listing does not request one.
    #[must_use]
    pub const fn with_default_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Sets the page number used when a listing does not request one.
    #[must_use]
    pub const fn with_default_page_number(mut self, page_number: u32) -> Self {
        self.default_page_number = page_number;
        self
    }

    /// Returns the admission ceiling.
    #[must_use]
    pub const fn max_tasks_in_progress(&self) -> u64 {
        self.max_tasks_in_progress
    }

    /// Returns the default page size.
    #[must_use]
    pub const fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    /// Returns the default page number.
    #[must_use]
    pub const fn default_page_number(&self) -> u32 {
        self.default_page_number
    }
}

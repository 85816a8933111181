//! Search filter and page window for task listing.

use super::{Task, TaskDomainError, TaskPriority, TaskStatus, UserId};

/// Exact-match search criteria for listing tasks.
///
/// Absent fields impose no constraint. Paging fields are optional; the
/// lifecycle service fills in configured defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Matches tasks created by this user.
    pub creator_id: Option<UserId>,
    /// Matches tasks assigned to this user.
    pub assigned_user_id: Option<UserId>,
    /// Matches tasks in this status.
    pub status: Option<TaskStatus>,
    /// Matches tasks with this priority.
    pub priority: Option<TaskPriority>,
    /// Requested page size.
    pub page_size: Option<u32>,
    /// Requested zero-based page number.
    pub page_number: Option<u32>,
}

impl TaskFilter {
    /// Returns whether `task` satisfies every present criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.creator_id.is_none_or(|id| task.creator_id() == id)
            && self
                .assigned_user_id
                .is_none_or(|id| task.assigned_user_id() == Some(id))
            && self.status.is_none_or(|status| task.status() == status)
            && self
                .priority
                .is_none_or(|priority| task.priority() == priority)
    }
}

/// Bounded window into an id-ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: u64,
    limit: u64,
}

impl PageRequest {
    /// Computes the window for a zero-based page.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPageSize`] when `page_size` is zero.
    pub fn new(page_size: u32, page_number: u32) -> Result<Self, TaskDomainError> {
        if page_size == 0 {
            return Err(TaskDomainError::InvalidPageSize);
        }
        let limit = u64::from(page_size);
        Ok(Self {
            offset: limit * u64::from(page_number),
            limit,
        })
    }

    /// Returns the number of records to skip.
    #[must_use]
    pub const fn offset(self) -> u64 {
        self.offset
    }

    /// Returns the maximum number of records to return.
    #[must_use]
    pub const fn limit(self) -> u64 {
        self.limit
    }
}

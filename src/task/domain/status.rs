//! Task workflow status and the state machine over it.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow status.
///
/// ```text
/// CREATED --start--> IN_PROGRESS --complete--> DONE --resume--> IN_PROGRESS
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Created,
    /// Task is being worked on by its assigned executor.
    InProgress,
    /// Task has been completed. It can still be resumed.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Returns whether the workflow has an edge from `self` to `target`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        match self {
            Self::Created => matches!(target, Self::InProgress),
            Self::InProgress => matches!(target, Self::Done),
            Self::Done => matches!(target, Self::InProgress),
        }
    }

    /// Returns whether tasks in this status accept field updates.
    #[must_use]
    pub const fn accepts_updates(self) -> bool {
        match self {
            Self::Created | Self::InProgress => true,
            Self::Done => false,
        }
    }

    /// Returns whether tasks in this status must have an assigned executor.
    #[must_use]
    pub const fn requires_executor(self) -> bool {
        match self {
            Self::InProgress => true,
            Self::Created | Self::Done => false,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "CREATED" => Ok(Self::Created),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

//! Domain model for task lifecycle management.
//!
//! The task domain owns field validation and the workflow state machine.
//! Persistence, transport and time sources stay outside this boundary; the
//! current time is always read through an injected [`mockable::Clock`].

mod draft;
mod error;
mod filter;
mod ids;
mod priority;
mod status;
mod task;

pub use draft::TaskDraft;
pub use error::{ErrorKind, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use filter::{PageRequest, TaskFilter};
pub use ids::{TaskId, UserId};
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};

//! HTTP request surface for task lifecycle operations.
//!
//! Handlers translate JSON payloads into lifecycle service calls and map
//! [`ErrorKind`](crate::task::domain::ErrorKind) values onto status codes:
//! not-found becomes 404, invalid-argument and conflict become 400, and
//! internal failures become 500.

mod error;
mod handlers;
mod payload;

pub use error::{ApiError, ErrorResponse};
pub use handlers::router;
pub use payload::{TaskQuery, TaskRequest, TaskResponse};

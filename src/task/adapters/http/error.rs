//! Error responses for the task HTTP surface.

use crate::task::{
    domain::{ErrorKind, TaskDomainError},
    services::TaskLifecycleError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Short category message.
    pub message: String,
    /// Underlying failure description.
    pub detailed_message: String,
    /// Time at which the error was produced.
    pub error_date_time: DateTime<Utc>,
}

/// Lifecycle failure converted into an HTTP response.
#[derive(Debug)]
pub struct ApiError(TaskLifecycleError);

impl ApiError {
    /// Returns the wrapped lifecycle error.
    #[must_use]
    pub const fn inner(&self) -> &TaskLifecycleError {
        &self.0
    }

    /// Returns the HTTP status code for this failure.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidArgument | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn message(&self) -> &'static str {
        match self.0.kind() {
            ErrorKind::NotFound => "Not found",
            ErrorKind::InvalidArgument | ErrorKind::Conflict => "Bad request",
            ErrorKind::Internal => "Internal server error",
        }
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        Self(err)
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        Self(TaskLifecycleError::Domain(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        } else {
            warn!(error = %self.0, status = status.as_u16(), "request rejected");
        }
        let body = ErrorResponse {
            message: self.message().to_owned(),
            detailed_message: self.0.to_string(),
            error_date_time: Utc::now(),
        };
        (status, Json(body)).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::{messages, ApiResponse};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Failures surfaced by the HTTP layer, rendered as the error envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", messages::INVALID_CATEGORY_ID)]
    InvalidId,
    #[error("{}", messages::INVALID_CATEGORY_REQUEST)]
    InvalidRequest,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    /// Not-found answers 500, matching what existing clients expect.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidRequest => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::NotFound(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        if status.is_server_error() {
            error!(error = %msg, status = status.as_u16(), "request failed");
        } else {
            warn!(error = %msg, status = status.as_u16(), "request rejected");
        }
        (status, Json(ApiResponse::<()>::error(msg))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

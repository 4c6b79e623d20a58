use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use scene_core::errors::Error as CoreError;

use crate::api::shared::ApiEnvelope;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Request-scoped error: a status code plus the message that goes into the
/// response envelope. Internal detail never reaches the client; it is
/// logged at construction time instead.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    pub fn invalid_query(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn rate_limited() -> Self {
        ApiError {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "Too many requests, retry later".to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        tracing::error!("internal error: {}", detail.into());
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(inner) => ApiError::invalid_query(inner.to_string()),
            CoreError::Session(inner) => ApiError::unauthenticated(inner.to_string()),
            CoreError::NotFound(_) => ApiError::not_found(err.to_string()),
            CoreError::Storage(inner) => ApiError::internal(inner.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = ApiEnvelope::<()>::failure(self.message);
        (self.status, Json(envelope)).into_response()
    }
}

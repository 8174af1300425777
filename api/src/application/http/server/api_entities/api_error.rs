use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use campdir_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Body every failed request gets: `{success: false, error: <message>}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            ApiError::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::InternalServerError(message) => {
                // Internal details go to the log, never to the client.
                error!("Internal server error: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error".to_string())
            }
        };

        let body = ErrorBody {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(message) => ApiError::NotFound(message),
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::Duplicate => ApiError::BadRequest(err.to_string()),
            CoreError::InvalidQuery(message) => ApiError::BadRequest(message),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::Unauthorized(message) => ApiError::Unauthorized(message),
            CoreError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            CoreError::FileTooLarge => ApiError::BadRequest(err.to_string()),
            CoreError::ObjectStorage(message) => ApiError::InternalServerError(message),
            CoreError::MailDelivery => ApiError::InternalServerError(err.to_string()),
            CoreError::Internal => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_maps_to_bad_request() {
        let api_err = ApiError::from(CoreError::Duplicate);
        assert_eq!(
            api_err,
            ApiError::BadRequest("Duplicate field value entered".to_string())
        );
    }

    #[test]
    fn not_found_keeps_its_message() {
        let api_err = ApiError::from(CoreError::NotFound("No course found with id: 7".into()));
        assert_eq!(
            api_err,
            ApiError::NotFound("No course found with id: 7".to_string())
        );
    }

    #[test]
    fn invalid_query_is_client_error() {
        let api_err = ApiError::from(CoreError::InvalidQuery("Unknown filter field: foo".into()));
        assert!(matches!(api_err, ApiError::BadRequest(_)));
    }
}

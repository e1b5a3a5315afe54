use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::account::errors::AuthError;

pub mod health;
pub mod login;
pub mod logout;

/// API-facing error: `{"detail": "..."}` with the mapped status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Unauthorized(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Unauthorized(detail) => (StatusCode::UNAUTHORIZED, detail),
            ApiError::InternalServerError(cause) => {
                // Diagnostics go to the log; clients get a constant body.
                tracing::error!(error = %cause, "Authentication request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::CredentialsRejected | AuthError::AccountDeactivated => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::StoreUnavailable(_)
            | AuthError::SigningFailure(_)
            | AuthError::Timeout(_)
            | AuthError::Internal(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

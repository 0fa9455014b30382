use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::auth::errors::AuthError;
use service::errors::ServiceError;

/// JSON error envelope returned by every API handler.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let msg = self.detail.unwrap_or_else(|| self.title.to_string());
        (self.status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::Model(m) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(m.to_string()))
            }
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "Conflict", Some(msg)),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Storage(msg) => {
                error!(error = %msg, "storage failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    None,
                )
            }
        }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            AuthError::Unauthorized => {
                Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", None)
            }
            AuthError::Store(e) => Self::from(e),
            AuthError::Hash(msg) | AuthError::Token(msg) => {
                error!(error = %msg, "auth failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    None,
                )
            }
        }
    }
}

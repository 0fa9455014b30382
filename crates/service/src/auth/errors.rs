use thiserror::Error;

use crate::errors::ServiceError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("hash error: {0}")]
    Hash(String),
    #[error("token error: {0}")]
    Token(String),
    #[error(transparent)]
    Store(#[from] ServiceError),
}

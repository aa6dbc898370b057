use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::AccountId;

pub const EMPTY_PASSWORD_MESSAGE: &str = "Password cannot be empty";
pub const WEAK_PASSWORD_MESSAGE: &str =
    "Password must contain at least one uppercase letter, one lowercase letter, and one digit";

#[derive(Debug, Error)]
pub enum AccountError {
    /// Create was invoked without an account payload.
    #[error("Account is required")]
    NullInput,

    #[error("{}", EMPTY_PASSWORD_MESSAGE)]
    EmptyPassword,

    #[error("{}", WEAK_PASSWORD_MESSAGE)]
    WeakPassword,

    /// Raised by the transport layer only; the service reports a missing
    /// account as `None`.
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    #[error("Invalid input: {0}")]
    InvalidFields(#[from] ValidationErrors),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AccountResult<T> = Result<T, AccountError>;

/// Convert AccountError to AppError for standardized error responses
impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound(id) => AppError::NotFound(format!("Account {} not found", id)),
            AccountError::InvalidFields(errors) => AppError::ValidationError(errors),
            AccountError::PasswordHash(msg) => {
                tracing::error!("Password hash error: {}", msg);
                AppError::InternalServerError("An internal error occurred".to_string())
            }
            AccountError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                AppError::InternalServerError("An internal error occurred".to_string())
            }
            client @ (AccountError::NullInput
            | AccountError::EmptyPassword
            | AccountError::WeakPassword) => AppError::BadRequest(client.to_string()),
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

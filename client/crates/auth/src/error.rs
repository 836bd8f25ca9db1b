//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::{HttpError, ValidationErrors};
use platform::storage::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Backend call failed (validation payloads are carried unchanged)
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Persisted token could not be read or written
    #[error("Local storage error: {0}")]
    Storage(#[from] StorageError),

    /// Operation needs a signed-in session
    #[error("Not signed in")]
    NotSignedIn,

    /// Registration input inconsistent with the requested step
    #[error("Invalid registration: {0}")]
    InvalidRegistration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Field errors returned by the backend, if any
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            AuthError::Http(e) => e.validation(),
            _ => None,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Http(e) => e.kind(),
            AuthError::Storage(e) => e.kind(),
            AuthError::NotSignedIn => ErrorKind::Unauthorized,
            AuthError::InvalidRegistration(_) => ErrorKind::BadRequest,
            AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let message = match self.validation() {
            Some(errors) => errors.to_string(),
            None => self.to_string(),
        };
        AppError::new(self.kind(), message)
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Http(HttpError::Validation(errors)) => {
                tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Auth input rejected");
            }
            AuthError::Http(e) if matches!(e.status(), Some(401 | 403)) => {
                tracing::warn!(status = ?e.status(), "Credentials rejected by backend");
            }
            AuthError::Http(e) => {
                tracing::error!(error = %e, "Auth request failed");
            }
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Token storage error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.log();
        err.to_app_error().with_source(err)
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passthrough() {
        let err = AuthError::from(HttpError::from_response(
            422,
            r#"{"message":"invalid","errors":{"email":["Taken"]}}"#,
        ));
        assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);
        assert_eq!(err.validation().unwrap().first("email"), Some("Taken"));

        let app: AppError = err.into();
        assert_eq!(app.message(), "invalid");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(AuthError::NotSignedIn.kind(), ErrorKind::Unauthorized);
        let err = AuthError::from(HttpError::from_response(401, "{}"));
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(err.validation().is_none());
    }
}

//! Marketplace Error Types
//!
//! Marketplace-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::http::{HttpError, ValidationErrors};
use thiserror::Error;

/// Marketplace-specific result type alias
pub type MarketplaceResult<T> = Result<T, MarketplaceError>;

#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// Backend call failed (validation payloads are carried unchanged)
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A record the operation depends on does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected before any request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MarketplaceError {
    /// Field errors returned by the backend, if any
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            MarketplaceError::Http(e) => e.validation(),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketplaceError::Http(e) => e.kind(),
            MarketplaceError::NotFound(_) => ErrorKind::NotFound,
            MarketplaceError::InvalidInput(_) => ErrorKind::BadRequest,
            MarketplaceError::Internal(_) => ErrorKind::Internal,
        }
    }

    fn log(&self) {
        match self {
            MarketplaceError::Http(HttpError::Validation(errors)) => {
                tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Marketplace input rejected");
            }
            MarketplaceError::Http(e) if e.is_unauthorized() => {
                tracing::warn!("Marketplace request without a valid session");
            }
            MarketplaceError::Http(e) => {
                tracing::error!(error = %e, "Marketplace request failed");
            }
            MarketplaceError::Internal(msg) => {
                tracing::error!(message = %msg, "Marketplace internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Marketplace error");
            }
        }
    }
}

impl From<MarketplaceError> for AppError {
    fn from(err: MarketplaceError) -> Self {
        err.log();
        let message = match err.validation() {
            Some(errors) => errors.to_string(),
            None => err.to_string(),
        };
        AppError::new(err.kind(), message).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            MarketplaceError::NotFound("accepted bid".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            MarketplaceError::InvalidInput("rating".into()).kind(),
            ErrorKind::BadRequest
        );
        let err = MarketplaceError::from(HttpError::from_response(404, "{}"));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_validation_message_reaches_app_error() {
        let body = r#"{"message":"The offer field is required.","errors":{"offer":["The offer field is required."]}}"#;
        let err = MarketplaceError::from(HttpError::from_response(422, body));
        assert!(err.validation().unwrap().has("offer"));

        let app: AppError = err.into();
        assert_eq!(app.kind(), ErrorKind::UnprocessableEntity);
        assert_eq!(app.message(), "The offer field is required.");
    }
}

//! Error conversions
//!
//! Transport failures are classified here so every crate reports a dropped
//! connection or a timeout with the same [`ErrorKind`].

use super::app_error::AppError;
#[cfg(feature = "reqwest")]
use super::kind::ErrorKind;

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return AppError::from_status(status.as_u16(), "Request rejected by server")
                .with_source(err);
        }
        if err.is_timeout() {
            AppError::new(ErrorKind::RequestTimeout, "Request timed out")
                .with_action("Try again in a moment")
                .with_source(err)
        } else if err.is_decode() {
            AppError::internal("Unexpected response body").with_source(err)
        } else if err.is_builder() {
            AppError::internal("Invalid request").with_source(err)
        } else {
            AppError::network("Could not reach the server")
                .with_action("Check your connection and try again")
                .with_source(err)
        }
    }
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
    use super::*;

    #[test]
    fn test_builder_error_is_internal() {
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        let app: AppError = err.into();
        assert_eq!(app.kind(), ErrorKind::Internal);
        assert!(!app.is_remote());
    }
}

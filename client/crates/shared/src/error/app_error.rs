//! Application Error
//!
//! [`AppError`] is what every crate error collapses into before it reaches
//! the command line; [`AppResult<T>`] is its result alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// クライアント共通エラー
///
/// `AuthError` / `MarketplaceError` / `HttpError` はすべてここへ変換され、
/// バイナリ側は `kind` と `action` だけを見て表示を決めます。
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::Network, "Could not reach the server")
///     .with_action("Check your connection and try again");
/// assert_eq!(err.kind(), ErrorKind::Network);
/// assert_eq!(err.action(), Some("Check your connection and try again"));
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    /// 利用者への次の一手（例: 再ログイン）
    action: Option<Cow<'static, str>>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// バックエンドの HTTP ステータスから分類
    #[inline]
    pub fn from_status(status: u16, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::from_status(status), message)
    }

    /// サーバーに届かなかった
    #[inline]
    pub fn network(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// バックエンドが返したエラーかどうか
    #[inline]
    pub fn is_remote(&self) -> bool {
        self.kind.is_remote()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " ({action})")?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

/// `None` を指定の種別の `AppError` にする
pub trait OptionExt<T> {
    fn ok_or_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_app_err(self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> AppResult<T> {
        self.ok_or_else(|| AppError::new(kind, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classifies_backend_errors() {
        let err = AppError::from_status(422, "The given data was invalid.");
        assert_eq!(err.kind(), ErrorKind::UnprocessableEntity);
        assert_eq!(err.message(), "The given data was invalid.");
        assert!(err.is_remote());
        assert!(err.action().is_none());
    }

    #[test]
    fn test_local_errors_are_not_remote() {
        assert!(!AppError::network("down").is_remote());
        assert_eq!(AppError::internal("bug").kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_display_includes_action() {
        let err = AppError::new(ErrorKind::NotFound, "Category not found");
        assert_eq!(err.to_string(), "[Not Found] Category not found");

        let err = AppError::network("Offline").with_action("Retry later");
        assert_eq!(err.to_string(), "[Network Error] Offline (Retry later)");
    }

    #[test]
    fn test_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AppError::internal("Failed to read").with_source(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        let err = none
            .ok_or_app_err(ErrorKind::Unauthorized, "Not signed in")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        let some: Option<i32> = Some(42);
        assert_eq!(some.ok_or_app_err(ErrorKind::NotFound, "missing").unwrap(), 42);
    }
}

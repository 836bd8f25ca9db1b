//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum. Remote kinds map to the HTTP status the
//! backend answered with; local kinds never reached a server.

use serde::Serialize;

/// エラー種別の列挙体
///
/// バックエンドが返した HTTP ステータス、またはクライアント内部の失敗を分類します。
/// リモート由来の種別は RFC 9110 のステータスコードに対応し、
/// ローカル種別（`Network` / `Storage` / `Internal`）はステータスを持ちません。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::from_status(422);
/// assert_eq!(kind, ErrorKind::UnprocessableEntity);
/// assert_eq!(kind.status_code(), Some(422));
/// assert_eq!(ErrorKind::Network.status_code(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: リクエストが不正
    BadRequest,
    /// 401 - Unauthorized: 認証が必要
    Unauthorized,
    /// 403 - Forbidden: アクセス権限なし
    Forbidden,
    /// 404 - Not Found: リソースが見つからない
    NotFound,
    /// 408 - Request Timeout: リクエストタイムアウト
    RequestTimeout,
    /// 409 - Conflict: 現在の状態と競合
    Conflict,
    /// 410 - Gone: リソースが削除された
    Gone,
    /// 422 - Unprocessable Entity: 入力検証エラー
    UnprocessableEntity,
    /// 429 - Too Many Requests: レート制限超過
    TooManyRequests,
    /// 500 - Internal Server Error: サーバー内部エラー
    InternalServerError,
    /// 503 - Service Unavailable: サービス利用不可
    ServiceUnavailable,
    /// 通信エラー（接続失敗など、レスポンスなし）
    Network,
    /// 端末ローカルストレージのエラー
    Storage,
    /// クライアント内部エラー
    Internal,
}

impl ErrorKind {
    /// HTTP ステータスコードから種別を決定
    ///
    /// 個別に対応しないステータスは 4xx なら `BadRequest`、
    /// 502/504 なら `ServiceUnavailable`、それ以外は `InternalServerError` に丸めます。
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::RequestTimeout,
            409 => ErrorKind::Conflict,
            410 => ErrorKind::Gone,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            502..=504 => ErrorKind::ServiceUnavailable,
            400..=499 => ErrorKind::BadRequest,
            _ => ErrorKind::InternalServerError,
        }
    }

    /// HTTP ステータスコードを取得
    ///
    /// ## Returns
    /// リモート種別なら `Some(status)`、ローカル種別なら `None`
    #[inline]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            ErrorKind::BadRequest => Some(400),
            ErrorKind::Unauthorized => Some(401),
            ErrorKind::Forbidden => Some(403),
            ErrorKind::NotFound => Some(404),
            ErrorKind::RequestTimeout => Some(408),
            ErrorKind::Conflict => Some(409),
            ErrorKind::Gone => Some(410),
            ErrorKind::UnprocessableEntity => Some(422),
            ErrorKind::TooManyRequests => Some(429),
            ErrorKind::InternalServerError => Some(500),
            ErrorKind::ServiceUnavailable => Some(503),
            ErrorKind::Network | ErrorKind::Storage | ErrorKind::Internal => None,
        }
    }

    /// ユーザー向けの文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Gone => "Gone",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
            ErrorKind::Network => "Network Error",
            ErrorKind::Storage => "Storage Error",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// バックエンドから返されたエラーかどうか
    #[inline]
    pub const fn is_remote(&self) -> bool {
        self.status_code().is_some()
    }

    /// サーバー側のエラーかどうかを判定
    ///
    /// 5xx 系のエラーは `true` を返します。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        match self.status_code() {
            Some(code) => code >= 500,
            None => false,
        }
    }

    /// クライアント側のエラーかどうかを判定
    ///
    /// 4xx 系のエラーは `true` を返します。ローカル種別は含みません。
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        match self.status_code() {
            Some(code) => code >= 400 && code < 500,
            None => false,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(422), ErrorKind::UnprocessableEntity);
        assert_eq!(ErrorKind::from_status(418), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(502), ErrorKind::ServiceUnavailable);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::InternalServerError);
        assert_eq!(ErrorKind::from_status(599), ErrorKind::InternalServerError);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), Some(400));
        assert_eq!(ErrorKind::Unauthorized.status_code(), Some(401));
        assert_eq!(ErrorKind::UnprocessableEntity.status_code(), Some(422));
        assert_eq!(ErrorKind::ServiceUnavailable.status_code(), Some(503));
        assert_eq!(ErrorKind::Network.status_code(), None);
        assert_eq!(ErrorKind::Storage.status_code(), None);
        assert_eq!(ErrorKind::Internal.status_code(), None);
    }

    #[test]
    fn test_is_server_error() {
        assert!(!ErrorKind::BadRequest.is_server_error());
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(ErrorKind::ServiceUnavailable.is_server_error());
        assert!(!ErrorKind::Network.is_server_error());
    }

    #[test]
    fn test_is_client_error() {
        assert!(ErrorKind::BadRequest.is_client_error());
        assert!(ErrorKind::UnprocessableEntity.is_client_error());
        assert!(!ErrorKind::InternalServerError.is_client_error());
        assert!(!ErrorKind::Storage.is_client_error());
    }

    #[test]
    fn test_is_remote() {
        assert!(ErrorKind::NotFound.is_remote());
        assert!(!ErrorKind::Network.is_remote());
    }
}

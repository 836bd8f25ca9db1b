//! Outgoing-request credential
//!
//! The backend authenticates every call with `Authorization: Bearer <token>`.
//! One [`Credential`] slot exists per process; every [`crate::http::ApiClient`]
//! clone reads from the same slot, so replacing the token once affects all
//! subsequent requests.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tokio::sync::RwLock;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Opaque bearer credential issued by the backend
///
/// ## Security
/// - Zeroized on drop
/// - Debug output is redacted
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw token text, as persisted to storage
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

impl Serialize for BearerToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BearerToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}

/// Shared slot for the credential attached to outgoing requests
///
/// Cloning is cheap and every clone observes the same value.
#[derive(Clone, Default)]
pub struct Credential {
    inner: Arc<RwLock<Option<BearerToken>>>,
}

impl Credential {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current credential, returning the previous one
    pub async fn set(&self, token: Option<BearerToken>) -> Option<BearerToken> {
        let mut slot = self.inner.write().await;
        let previous = std::mem::replace(&mut *slot, token);
        tracing::debug!(attached = slot.is_some(), "Request credential replaced");
        previous
    }

    pub async fn get(&self) -> Option<BearerToken> {
        self.inner.read().await.clone()
    }

    pub async fn is_set(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// `Authorization` header value, if a credential is attached
    pub(crate) async fn header_value(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(BearerToken::authorization_value)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attached = self
            .inner
            .try_read()
            .map(|slot| slot.is_some())
            .unwrap_or(true);
        f.debug_struct("Credential")
            .field("attached", &attached)
            .finish()
    }
}

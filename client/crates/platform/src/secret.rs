//! Secret strings
//!
//! Passwords typed by the user are held in a [`SecretString`] until they
//! are sent to the credential exchange endpoint.
//!
//! ## Security Features
//! - Zeroization of the buffer on drop
//! - Redacted `Debug` output so secrets never reach the logs

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Clear text secret with automatic memory zeroization
///
/// ## Examples
/// ```rust
/// use platform::secret::SecretString;
///
/// let password = SecretString::new("hunter22");
/// assert_eq!(password.expose(), "hunter22");
/// assert_eq!(format!("{password:?}"), "SecretString([REDACTED])");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the clear text. Only call this at the point of use.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl From<String> for SecretString {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for SecretString {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

// Request bodies carry the clear text; the wire format is a plain string.
impl Serialize for SecretString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let secret = SecretString::new("super-secret");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let secret = SecretString::from("pw");
        assert_eq!(serde_json::to_string(&secret).unwrap(), "\"pw\"");
    }

    #[test]
    fn test_zeroize() {
        let mut secret = SecretString::new("wipe-me");
        secret.zeroize();
        assert!(secret.is_empty());
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Marketplace role of an account
///
/// The backend only distinguishes suppliers; every other code is treated as
/// a client, matching what the app shows for unknown roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserType {
    #[default]
    Client,
    Supplier,
}

impl UserType {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserType::Client => "client",
            UserType::Supplier => "supplier",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "supplier" => UserType::Supplier,
            "client" => UserType::Client,
            other => {
                tracing::debug!(code = other, "Unknown user type, treating as client");
                UserType::Client
            }
        }
    }

    #[inline]
    pub const fn is_supplier(&self) -> bool {
        matches!(self, UserType::Supplier)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for UserType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for UserType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(code.as_deref().map(Self::from_code).unwrap_or_default())
    }
}

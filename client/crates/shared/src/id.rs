//! Common ID Types
//!
//! Type-safe wrappers for the backend's auto-increment integer keys.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use thiserror::Error;

/// Generic typed ID wrapper
///
/// Serialises as a bare JSON number, the way the API sends keys.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type BidId = Id<markers::Bid>;
/// let id = BidId::new(7);
/// assert_eq!(id.get(), 7);
/// ```
pub struct Id<T> {
    value: u64,
    _marker: PhantomData<fn() -> T>,
}

/// Error returned when an ID cannot be parsed from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id: {0:?}")]
pub struct IdParseError(pub String);

impl<T> Id<T> {
    /// Wrap a raw key
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the raw key
    pub const fn get(&self) -> u64 {
        self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<u64> for Id<T> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for u64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self::new)
            .map_err(|_| IdParseError(s.to_string()))
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs (clients and suppliers)
    pub struct User;

    /// Marker for Category IDs
    pub struct Category;

    /// Marker for Service IDs
    pub struct Service;

    /// Marker for service Request IDs
    pub struct Request;

    /// Marker for Bid IDs
    pub struct Bid;

    /// Marker for Opinion IDs
    pub struct Opinion;

    /// Marker for Order IDs
    pub struct Order;

    /// Marker for Media IDs
    pub struct Media;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type CategoryId = Id<markers::Category>;
pub type ServiceId = Id<markers::Service>;
pub type RequestId = Id<markers::Request>;
pub type BidId = Id<markers::Bid>;
pub type OpinionId = Id<markers::Opinion>;
pub type OrderId = Id<markers::Order>;
pub type MediaId = Id<markers::Media>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_number() {
        let id = BidId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let parsed: RequestId = serde_json::from_str("17").unwrap();
        assert_eq!(parsed.get(), 17);
    }

    #[test]
    fn test_id_from_str() {
        let id: UserId = " 9 ".parse().unwrap();
        assert_eq!(id, UserId::new(9));
        assert!("abc".parse::<UserId>().is_err());
    }

    #[test]
    fn test_id_is_copy_without_marker_bounds() {
        let id = CategoryId::new(3);
        let copy = id;
        assert_eq!(id, copy);
        assert_eq!(format!("{id:?}"), "Id(3)");
    }
}

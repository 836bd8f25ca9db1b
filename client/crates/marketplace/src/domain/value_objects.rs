//! Marketplace Value Objects

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;

// ============================================================================
// Money
// ============================================================================

/// Amount in whole cents
///
/// On the wire it is a decimal number of dollars; the backend may also send
/// it as a string (`"25.50"`). Values are rounded to the nearest cent on the
/// way in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn from_decimal(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    pub const fn cents(&self) -> i64 {
        self.cents
    }

    pub fn as_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Multiply by a rate, rounding half away from zero to the cent
    pub fn scale(&self, rate: f64) -> Self {
        Self {
            cents: (self.cents as f64 * rate).round() as i64,
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        kernel::wire::lenient_f64(deserializer).map(Money::from_decimal)
    }
}

// ============================================================================
// Statuses
// ============================================================================

/// Lifecycle of a bid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BidStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    /// Code this client does not know; kept verbatim
    Other(String),
}

impl BidStatus {
    pub fn code(&self) -> &str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accepted => "accepted",
            BidStatus::Rejected => "rejected",
            BidStatus::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => BidStatus::Pending,
            "accepted" => BidStatus::Accepted,
            "rejected" => BidStatus::Rejected,
            other => BidStatus::Other(other.to_string()),
        }
    }
}

/// Lifecycle of a service request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl RequestStatus {
    pub fn code(&self) -> &str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => RequestStatus::Pending,
            "in_progress" => RequestStatus::InProgress,
            "completed" => RequestStatus::Completed,
            other => RequestStatus::Other(other.to_string()),
        }
    }
}

macro_rules! status_serde {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = Option::<String>::deserialize(deserializer)?;
                Ok(code.as_deref().map(Self::from_code).unwrap_or_default())
            }
        }
    };
}

status_serde!(BidStatus);
status_serde!(RequestStatus);

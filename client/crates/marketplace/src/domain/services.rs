//! Domain Services
//!
//! Pure helpers shared by the use cases.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::Money;

/// Timestamp format the backend stores and compares against
pub const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_wire_datetime(at: &DateTime<Utc>) -> String {
    at.format(WIRE_DATETIME_FORMAT).to_string()
}

/// Amounts charged for one accepted bid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderTotals {
    /// Tax is `subtotal * tax_rate`, rounded to the cent; total is their sum
    pub fn from_subtotal(subtotal: Money, tax_rate: f64) -> Self {
        let tax = subtotal.scale(tax_rate);
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Ratings are whole stars from 1 to 5
pub fn is_valid_rating(rating: u8) -> bool {
    (1..=5).contains(&rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_order_totals() {
        let totals = OrderTotals::from_subtotal(Money::from_cents(4500), 0.12);
        assert_eq!(totals.tax, Money::from_cents(540));
        assert_eq!(totals.total, Money::from_cents(5040));

        let totals = OrderTotals::from_subtotal(Money::from_cents(1999), 0.12);
        assert_eq!(totals.tax, Money::from_cents(240));
        assert_eq!(totals.total, Money::from_cents(2239));
    }

    #[test]
    fn test_order_totals_saturate_on_huge_offer() {
        let totals = OrderTotals::from_subtotal(Money::from_cents(i64::MAX - 10), 0.12);
        assert_eq!(totals.total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_wire_datetime() {
        let at = Utc.with_ymd_and_hms(2026, 1, 5, 7, 3, 9).unwrap();
        assert_eq!(format_wire_datetime(&at), "2026-01-05 07:03:09");
    }

    #[test]
    fn test_rating_bounds() {
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(0));
        assert!(!is_valid_rating(6));
    }
}

//! User Profile Entity
//!
//! Snapshot of the signed-in account as returned by `GET /me`.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use kernel::wire::{lenient_bool, lenient_datetime, lenient_f64, lenient_u32, null_default};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_type::UserType;

/// Share of opinions with a given star rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub percentage: f64,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub rating: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total: u32,
}

/// User profile
///
/// Unknown fields are ignored; missing or `null` scalars take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_default")]
    pub dni: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_description: Option<String>,
    #[serde(default)]
    pub ruc: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub approved: bool,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_rating: f64,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_opinions: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub ratings: Vec<RatingBreakdown>,
    #[serde(rename = "type", default)]
    pub user_type: UserType,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub email_verified_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name).trim().to_string()
    }

    #[inline]
    pub fn is_supplier(&self) -> bool {
        self.user_type.is_supplier()
    }

    /// Display name for suppliers falls back to the person when no company is set
    pub fn display_name(&self) -> String {
        match self.company_name.as_deref().map(str::trim) {
            Some(company) if self.is_supplier() && !company.is_empty() => company.to_string(),
            _ => self.full_name(),
        }
    }

    pub fn is_email_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }
}

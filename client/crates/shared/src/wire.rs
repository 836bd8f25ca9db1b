//! Lenient decoders for backend JSON
//!
//! The backend serialises decimals as strings (`"12.50"`), booleans as
//! `0`/`1`, and sends `null` for unset columns. These helpers are used with
//! `#[serde(deserialize_with = "...")]` so entities decode without failing
//! on those variations.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// `null` becomes `T::default()`
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Number or numeric string; `null` and unparsable text become `0.0`
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Float(v)) => v,
        Some(Loose::Int(v)) => v as f64,
        Some(Loose::Text(s)) => s.trim().parse().unwrap_or_default(),
        Some(Loose::Bool(_)) | None => 0.0,
    })
}

/// Non-negative integer or numeric string; anything else becomes `0`
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(v)) => u32::try_from(v).unwrap_or_default(),
        Some(Loose::Float(v)) if v >= 0.0 => v as u32,
        Some(Loose::Text(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

/// `true`/`false`, `0`/`1`, or `"0"`/`"1"`/`"true"`
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Bool(v)) => v,
        Some(Loose::Int(v)) => v != 0,
        Some(Loose::Float(v)) => v != 0.0,
        Some(Loose::Text(s)) => matches!(s.trim(), "1" | "true" | "TRUE" | "True"),
        None => false,
    })
}

/// RFC 3339 or `YYYY-MM-DD HH:MM:SS` (UTC); unparsable values become `None`
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_datetime))
}

/// Parse the timestamp formats the backend emits
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

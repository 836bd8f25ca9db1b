//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of the client's vocabulary:
//! - Common error types and result aliases
//! - Typed integer IDs for backend resources
//! - Lenient decoders for the backend's JSON conventions
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all client crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod wire;

//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session state machine, profile, gateway/repository traits
//! - `application/` - Use cases (bootstrap, sign in/out/up, profile refresh)
//! - `infra/` - Backend gateway and token storage implementations
//! - `presentation/` - Session store and root route selection
//!
//! ## Features
//! - Session restore from a persisted bearer token at startup
//! - Email/password sign-in through the token exchange endpoint
//! - Registration wizard (client and supplier) and profile edits
//! - Role-dependent root route (client vs. supplier tab sets)
//!
//! ## Security Model
//! - Tokens and passwords are zeroized on drop and redacted in logs
//! - A token is persisted only once the backend has accepted it
//! - An unverifiable persisted token is treated as signed out

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{HttpAuthGateway, StoredTokenRepository};
pub use presentation::store::{HttpSessionStore, SessionStore};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::credentials::*;
    pub use crate::domain::entity::session::*;
    pub use crate::domain::entity::user_profile::*;
    pub use crate::domain::value_object::user_type::*;
}

pub mod navigation {
    pub use crate::presentation::navigation::*;
}

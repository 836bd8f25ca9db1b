//! Marketplace Module
//!
//! Catalogue, service requests, bids, orders and opinions as exposed by the
//! backend's resource API.
//!
//! - `domain/` - Entities, value objects, query builder, gateway trait
//! - `application/` - Use cases
//! - `infra/` - HTTP gateway
//!
//! Every call goes through [`platform::http::ApiClient`], so it carries the
//! bearer token the session store placed in the shared credential slot.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::MarketplaceConfig;
pub use error::{MarketplaceError, MarketplaceResult};
pub use infra::http::HttpResourceGateway;

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
}

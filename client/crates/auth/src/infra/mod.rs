//! Infrastructure Layer
//!
//! Backend gateway and token storage implementations.

pub mod dto;
pub mod http;
pub mod storage;

pub use http::HttpAuthGateway;
pub use storage::StoredTokenRepository;

//! Infrastructure Layer
//!
//! HTTP implementation of the resource gateway.

pub mod http;

pub use http::HttpResourceGateway;

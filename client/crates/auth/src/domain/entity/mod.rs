//! Entity Module

pub mod credentials;
pub mod session;
pub mod user_profile;

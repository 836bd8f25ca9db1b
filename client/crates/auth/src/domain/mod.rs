//! Domain Layer
//!
//! Contains entities, value objects, and the gateway/repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    credentials::{ProfileUpdate, Registration, RegistrationStep, SignInCredentials, SupplierDetails},
    session::{Authenticated, Session, SessionAction, SessionPhase},
    user_profile::{RatingBreakdown, UserProfile},
};
pub use repository::{AuthGateway, TokenRepository};
pub use value_object::user_type::UserType;

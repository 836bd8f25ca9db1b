//! Gateway and Repository Traits
//!
//! Interfaces to the backend and to local persistence. Implementations are in
//! the infrastructure layer.

use platform::credential::BearerToken;

use crate::domain::entity::{
    credentials::{ProfileUpdate, Registration, RegistrationStep, SignInCredentials},
    user_profile::UserProfile,
};
use crate::error::AuthResult;

/// Backend auth endpoints and the outgoing-request credential
#[trait_variant::make(AuthGateway: Send)]
pub trait LocalAuthGateway {
    /// Exchange email/password for a bearer token (`POST /sanctum/token`)
    async fn issue_token(
        &self,
        credentials: &SignInCredentials,
        device_name: &str,
    ) -> AuthResult<BearerToken>;

    /// Profile of the account owning the current credential (`GET /me`)
    async fn fetch_profile(&self) -> AuthResult<UserProfile>;

    /// Replace the credential attached to every request, returning the previous one
    async fn set_credential(&self, token: Option<BearerToken>) -> Option<BearerToken>;

    /// Validate one step of the registration wizard (`POST /register/validate`)
    async fn validate_registration(
        &self,
        registration: &Registration,
        step: RegistrationStep,
    ) -> AuthResult<()>;

    /// Create the account and receive its first token (`POST /register`)
    async fn register(
        &self,
        registration: &Registration,
        device_name: &str,
    ) -> AuthResult<BearerToken>;

    /// Save editable profile fields (`POST /profile`)
    async fn update_profile(&self, update: &ProfileUpdate) -> AuthResult<()>;
}

/// Persisted bearer token
#[trait_variant::make(TokenRepository: Send)]
pub trait LocalTokenRepository {
    async fn load(&self) -> AuthResult<Option<BearerToken>>;

    async fn save(&self, token: &BearerToken) -> AuthResult<()>;

    async fn clear(&self) -> AuthResult<()>;
}

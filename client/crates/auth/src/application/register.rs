//! Register Use Case
//!
//! Drives the registration wizard against the backend: optional step
//! validation, then account creation. The returned token is persisted so the
//! new account survives a restart.

use std::sync::Arc;

use platform::credential::BearerToken;

use crate::application::config::AuthConfig;
use crate::domain::entity::credentials::{Registration, RegistrationStep};
use crate::domain::repository::{AuthGateway, TokenRepository};
use crate::error::{AuthError, AuthResult};

/// Register use case
pub struct RegisterUseCase<G, T>
where
    G: AuthGateway,
    T: TokenRepository,
{
    gateway: Arc<G>,
    tokens: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<G, T> RegisterUseCase<G, T>
where
    G: AuthGateway,
    T: TokenRepository,
{
    pub fn new(gateway: Arc<G>, tokens: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self {
            gateway,
            tokens,
            config,
        }
    }

    /// Ask the backend to validate one wizard step
    pub async fn validate_step(
        &self,
        registration: &Registration,
        step: RegistrationStep,
    ) -> AuthResult<()> {
        if step == RegistrationStep::Documents && registration.supplier.is_none() {
            return Err(AuthError::InvalidRegistration(
                "document step requires supplier details".to_string(),
            ));
        }
        self.gateway.validate_registration(registration, step).await
    }

    /// Create the account and persist its token
    pub async fn execute(&self, registration: &Registration) -> AuthResult<BearerToken> {
        if registration.user_type.is_supplier() && registration.supplier.is_none() {
            return Err(AuthError::InvalidRegistration(
                "supplier registration requires supplier details".to_string(),
            ));
        }

        let token = self
            .gateway
            .register(registration, self.config.device_name())
            .await?;
        self.tokens.save(&token).await?;

        tracing::info!(user_type = %registration.user_type, "Account registered");
        Ok(token)
    }
}

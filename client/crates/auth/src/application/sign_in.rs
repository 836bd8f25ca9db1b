//! Sign In Use Case
//!
//! Exchanges email/password for a token, verifies it by fetching the profile,
//! and persists it.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::credentials::SignInCredentials;
use crate::domain::entity::session::Authenticated;
use crate::domain::repository::{AuthGateway, TokenRepository};
use crate::error::{AuthError, AuthResult};

/// Sign in use case
pub struct SignInUseCase<G, T>
where
    G: AuthGateway,
    T: TokenRepository,
{
    gateway: Arc<G>,
    tokens: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<G, T> SignInUseCase<G, T>
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

    /// On failure the previous credential is put back and nothing is persisted
    pub async fn execute(&self, credentials: &SignInCredentials) -> AuthResult<Authenticated> {
        let token = self
            .gateway
            .issue_token(credentials, self.config.device_name())
            .await?;

        let previous = self.gateway.set_credential(Some(token.clone())).await;

        let result = async {
            let user = self.gateway.fetch_profile().await?;
            self.tokens.save(&token).await?;
            Ok::<_, AuthError>(user)
        }
        .await;

        match result {
            Ok(user) => {
                tracing::info!(user_id = %user.id, user_type = %user.user_type, "User signed in");
                Ok(Authenticated { token, user })
            }
            Err(e) => {
                self.gateway.set_credential(previous).await;
                Err(e)
            }
        }
    }
}

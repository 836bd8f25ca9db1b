//! Sign Up Use Case
//!
//! Adopts a token obtained from the registration flow.

use std::sync::Arc;

use platform::credential::BearerToken;

use crate::domain::entity::session::Authenticated;
use crate::domain::repository::AuthGateway;
use crate::error::AuthResult;

/// Sign up use case
pub struct SignUpUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
}

impl<G> SignUpUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, token: BearerToken) -> AuthResult<Authenticated> {
        let previous = self.gateway.set_credential(Some(token.clone())).await;

        match self.gateway.fetch_profile().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, user_type = %user.user_type, "User signed up");
                Ok(Authenticated { token, user })
            }
            Err(e) => {
                self.gateway.set_credential(previous).await;
                Err(e)
            }
        }
    }
}

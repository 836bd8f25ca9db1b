//! Bootstrap Use Case
//!
//! Restores the previous session from the persisted token at startup.

use std::sync::Arc;

use crate::domain::entity::session::Authenticated;
use crate::domain::repository::{AuthGateway, TokenRepository};

/// Bootstrap use case
pub struct BootstrapUseCase<G, T>
where
    G: AuthGateway,
    T: TokenRepository,
{
    gateway: Arc<G>,
    tokens: Arc<T>,
}

impl<G, T> BootstrapUseCase<G, T>
where
    G: AuthGateway,
    T: TokenRepository,
{
    pub fn new(gateway: Arc<G>, tokens: Arc<T>) -> Self {
        Self { gateway, tokens }
    }

    /// Never fails: any token that cannot be verified yields `None`
    pub async fn execute(&self) -> Option<Authenticated> {
        let token = match self.tokens.load().await {
            Ok(Some(token)) => token,
            Ok(None) => {
                tracing::debug!("No persisted token, starting signed out");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisted token unreadable, starting signed out");
                return None;
            }
        };

        self.gateway.set_credential(Some(token.clone())).await;

        match self.gateway.fetch_profile().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, user_type = %user.user_type, "Session restored");
                Some(Authenticated { token, user })
            }
            Err(e) => {
                self.gateway.set_credential(None).await;
                tracing::info!(error = %e, "Persisted token not accepted, starting signed out");
                None
            }
        }
    }
}

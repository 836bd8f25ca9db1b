//! Sign Out Use Case
//!
//! Forgets the persisted token and detaches the request credential.

use std::sync::Arc;

use crate::domain::repository::{AuthGateway, TokenRepository};
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<G, T>
where
    G: AuthGateway,
    T: TokenRepository,
{
    gateway: Arc<G>,
    tokens: Arc<T>,
}

impl<G, T> SignOutUseCase<G, T>
where
    G: AuthGateway,
    T: TokenRepository,
{
    pub fn new(gateway: Arc<G>, tokens: Arc<T>) -> Self {
        Self { gateway, tokens }
    }

    /// The credential is always detached; a storage failure is still reported
    pub async fn execute(&self) -> AuthResult<()> {
        self.gateway.set_credential(None).await;
        self.tokens.clear().await?;

        tracing::info!("User signed out");
        Ok(())
    }
}

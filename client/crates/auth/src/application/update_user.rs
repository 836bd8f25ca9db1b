//! Update User Use Case
//!
//! Re-fetches the current profile so role-dependent views stay correct.

use std::sync::Arc;

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::repository::AuthGateway;
use crate::error::AuthResult;

/// Update user use case
pub struct UpdateUserUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
}

impl<G> UpdateUserUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self) -> AuthResult<UserProfile> {
        let user = self.gateway.fetch_profile().await?;
        tracing::debug!(user_id = %user.id, user_type = %user.user_type, "Profile refreshed");
        Ok(user)
    }
}

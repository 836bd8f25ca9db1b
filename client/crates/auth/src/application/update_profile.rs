//! Update Profile Use Case

use std::sync::Arc;

use crate::domain::entity::credentials::ProfileUpdate;
use crate::domain::repository::AuthGateway;
use crate::error::AuthResult;

/// Update profile use case
///
/// Only saves the fields; the caller refreshes the session afterwards.
pub struct UpdateProfileUseCase<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
}

impl<G> UpdateProfileUseCase<G>
where
    G: AuthGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, update: &ProfileUpdate) -> AuthResult<()> {
        self.gateway.update_profile(update).await?;
        tracing::info!("Profile saved");
        Ok(())
    }
}

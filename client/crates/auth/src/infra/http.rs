//! HTTP Gateway Implementation

use platform::credential::BearerToken;
use platform::http::ApiClient;

use crate::domain::entity::credentials::{
    ProfileUpdate, Registration, RegistrationStep, SignInCredentials,
};
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::repository::AuthGateway;
use crate::error::{AuthError, AuthResult};
use crate::infra::dto::{
    RegisterRequest, TokenRequest, TokenResponse, ValidateRegistrationRequest,
};

/// Auth gateway over the backend's JSON API
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl AuthGateway for HttpAuthGateway {
    async fn issue_token(
        &self,
        credentials: &SignInCredentials,
        device_name: &str,
    ) -> AuthResult<BearerToken> {
        let body = TokenRequest::new(credentials, device_name);
        let response: TokenResponse = self.client.post_json("/sanctum/token", &[], &body).await?;
        Ok(response.token)
    }

    async fn fetch_profile(&self) -> AuthResult<UserProfile> {
        Ok(self.client.get_json("/me", &[]).await?)
    }

    async fn set_credential(&self, token: Option<BearerToken>) -> Option<BearerToken> {
        self.client.credential().set(token).await
    }

    async fn validate_registration(
        &self,
        registration: &Registration,
        step: RegistrationStep,
    ) -> AuthResult<()> {
        let body = ValidateRegistrationRequest::new(registration, step).ok_or_else(|| {
            AuthError::InvalidRegistration("document step requires supplier details".to_string())
        })?;
        self.client.post("/register/validate", &body).await?;
        Ok(())
    }

    async fn register(
        &self,
        registration: &Registration,
        device_name: &str,
    ) -> AuthResult<BearerToken> {
        let body = RegisterRequest::new(registration, device_name);
        let response: TokenResponse = self.client.post_json("/register", &[], &body).await?;
        Ok(response.token)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> AuthResult<()> {
        self.client.post("/profile", update).await?;
        Ok(())
    }
}

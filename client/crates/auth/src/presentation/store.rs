//! Session Store
//!
//! Single owner of the process-wide [`Session`]. Front ends hold one store,
//! read it through [`SessionStore::subscribe`] / [`SessionStore::snapshot`],
//! and change it only through the operations below. Operations run one at a
//! time; each either completes its transition or leaves the session as it
//! was.

use std::sync::Arc;

use platform::credential::BearerToken;
use platform::http::ApiClient;
use platform::storage::KeyValueStore;
use tokio::sync::{Mutex, watch};

use crate::application::{
    AuthConfig, BootstrapUseCase, RegisterUseCase, SignInUseCase, SignOutUseCase, SignUpUseCase,
    UpdateProfileUseCase, UpdateUserUseCase,
};
use crate::domain::entity::credentials::{
    ProfileUpdate, Registration, RegistrationStep, SignInCredentials,
};
use crate::domain::entity::session::{Session, SessionAction};
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::repository::{AuthGateway, TokenRepository};
use crate::error::{AuthError, AuthResult};
use crate::infra::{HttpAuthGateway, StoredTokenRepository};
use crate::presentation::navigation::RootRoute;

/// Session store
pub struct SessionStore<G, T>
where
    G: AuthGateway,
    T: TokenRepository,
{
    gateway: Arc<G>,
    tokens: Arc<T>,
    config: Arc<AuthConfig>,
    state: watch::Sender<Session>,
    ops: Mutex<()>,
}

/// Store wired to the real backend and a key-value store
pub type HttpSessionStore<S> = SessionStore<HttpAuthGateway, StoredTokenRepository<S>>;

impl<S> SessionStore<HttpAuthGateway, StoredTokenRepository<S>>
where
    S: KeyValueStore + Sync,
{
    pub fn over_http(client: ApiClient, store: S, config: AuthConfig) -> Self {
        let tokens = StoredTokenRepository::new(store, config.token_storage_key.clone());
        Self::new(
            Arc::new(HttpAuthGateway::new(client)),
            Arc::new(tokens),
            Arc::new(config),
        )
    }
}

impl<G, T> SessionStore<G, T>
where
    G: AuthGateway,
    T: TokenRepository,
{
    /// New store in the `Bootstrapping` phase
    pub fn new(gateway: Arc<G>, tokens: Arc<T>, config: Arc<AuthConfig>) -> Self {
        let (state, _) = watch::channel(Session::bootstrapping());
        Self {
            gateway,
            tokens,
            config,
            state,
            ops: Mutex::new(()),
        }
    }

    // ========================================================================
    // Reading
    // ========================================================================

    /// Receiver notified on every transition
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Root route for the current session
    pub fn route(&self) -> RootRoute {
        RootRoute::for_session(&self.state.borrow())
    }

    fn dispatch(&self, action: SessionAction) {
        self.state.send_modify(|session| session.apply(action));
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Restore the persisted session. Runs once; later calls only return the
    /// current session.
    pub async fn bootstrap(&self) -> Session {
        let _guard = self.ops.lock().await;
        if self.state.borrow().is_ready() {
            return self.snapshot();
        }

        let restored = BootstrapUseCase::new(self.gateway.clone(), self.tokens.clone())
            .execute()
            .await;
        self.dispatch(SessionAction::Restored(restored));
        self.snapshot()
    }

    /// Errors (including 422 field errors) are returned unchanged and the
    /// session is left as it was.
    pub async fn sign_in(&self, credentials: &SignInCredentials) -> AuthResult<UserProfile> {
        let _guard = self.ops.lock().await;
        let auth = SignInUseCase::new(
            self.gateway.clone(),
            self.tokens.clone(),
            self.config.clone(),
        )
        .execute(credentials)
        .await?;

        let user = auth.user.clone();
        self.dispatch(SessionAction::SignedIn(auth));
        Ok(user)
    }

    /// Always ends signed out; a storage failure is returned after the reset
    pub async fn sign_out(&self) -> AuthResult<()> {
        let _guard = self.ops.lock().await;
        let result = SignOutUseCase::new(self.gateway.clone(), self.tokens.clone())
            .execute()
            .await;
        self.dispatch(SessionAction::SignedOut);
        result
    }

    /// Adopt a token obtained from registration
    pub async fn sign_up(&self, token: BearerToken) -> AuthResult<UserProfile> {
        let _guard = self.ops.lock().await;
        self.adopt(token).await
    }

    /// Re-fetch the current profile
    pub async fn update_user(&self) -> AuthResult<UserProfile> {
        let _guard = self.ops.lock().await;
        self.refresh_user().await
    }

    /// Server-side check of one registration step; no state change
    pub async fn validate_registration(
        &self,
        registration: &Registration,
        step: RegistrationStep,
    ) -> AuthResult<()> {
        self.register_use_case()
            .validate_step(registration, step)
            .await
    }

    /// Create the account, persist its token, and sign up with it
    pub async fn register(&self, registration: &Registration) -> AuthResult<UserProfile> {
        let _guard = self.ops.lock().await;
        let token = self.register_use_case().execute(registration).await?;
        self.adopt(token).await
    }

    /// Save profile fields, then refresh so the role is re-derived
    pub async fn update_profile(&self, update: &ProfileUpdate) -> AuthResult<UserProfile> {
        let _guard = self.ops.lock().await;
        if !self.state.borrow().is_authenticated() {
            return Err(AuthError::NotSignedIn);
        }
        UpdateProfileUseCase::new(self.gateway.clone())
            .execute(update)
            .await?;
        self.refresh_user().await
    }

    // ========================================================================
    // Helpers (caller holds `ops`)
    // ========================================================================

    async fn adopt(&self, token: BearerToken) -> AuthResult<UserProfile> {
        let auth = SignUpUseCase::new(self.gateway.clone())
            .execute(token)
            .await?;
        let user = auth.user.clone();
        self.dispatch(SessionAction::SignedIn(auth));
        Ok(user)
    }

    async fn refresh_user(&self) -> AuthResult<UserProfile> {
        if !self.state.borrow().is_authenticated() {
            return Err(AuthError::NotSignedIn);
        }
        let user = UpdateUserUseCase::new(self.gateway.clone())
            .execute()
            .await?;
        self.dispatch(SessionAction::UserUpdated(user.clone()));
        Ok(user)
    }

    fn register_use_case(&self) -> RegisterUseCase<G, T> {
        RegisterUseCase::new(
            self.gateway.clone(),
            self.tokens.clone(),
            self.config.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_type::UserType;
    use kernel::id::UserId;
    use platform::http::{HttpError, ValidationErrors};
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;

    /// Scripted gateway recording the credential it holds
    #[derive(Default)]
    struct FakeGateway {
        credential: StdMutex<Option<BearerToken>>,
        profiles: StdMutex<VecDeque<AuthResult<UserProfile>>>,
        issued: StdMutex<Option<BearerToken>>,
        profile_calls: StdMutex<u32>,
    }

    impl FakeGateway {
        fn push_profile(&self, result: AuthResult<UserProfile>) {
            self.profiles.lock().unwrap().push_back(result);
        }

        fn credential(&self) -> Option<BearerToken> {
            self.credential.lock().unwrap().clone()
        }
    }

    impl AuthGateway for FakeGateway {
        async fn issue_token(
            &self,
            _credentials: &SignInCredentials,
            _device_name: &str,
        ) -> AuthResult<BearerToken> {
            self.issued
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| AuthError::Http(HttpError::Validation(ValidationErrors::default())))
        }

        async fn fetch_profile(&self) -> AuthResult<UserProfile> {
            *self.profile_calls.lock().unwrap() += 1;
            self.profiles
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(AuthError::Internal("no scripted profile".into())))
        }

        async fn set_credential(&self, token: Option<BearerToken>) -> Option<BearerToken> {
            std::mem::replace(&mut *self.credential.lock().unwrap(), token)
        }

        async fn validate_registration(
            &self,
            _registration: &Registration,
            _step: RegistrationStep,
        ) -> AuthResult<()> {
            Ok(())
        }

        async fn register(
            &self,
            _registration: &Registration,
            _device_name: &str,
        ) -> AuthResult<BearerToken> {
            Ok(BearerToken::new("registered"))
        }

        async fn update_profile(&self, _update: &ProfileUpdate) -> AuthResult<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeTokens {
        stored: StdMutex<Option<BearerToken>>,
    }

    impl TokenRepository for FakeTokens {
        async fn load(&self) -> AuthResult<Option<BearerToken>> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, token: &BearerToken) -> AuthResult<()> {
            *self.stored.lock().unwrap() = Some(token.clone());
            Ok(())
        }

        async fn clear(&self) -> AuthResult<()> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    fn profile(id: u64, user_type: UserType) -> UserProfile {
        let mut user: UserProfile = serde_json::from_value(serde_json::json!({"id": id})).unwrap();
        user.user_type = user_type;
        user
    }

    fn store(
        gateway: Arc<FakeGateway>,
        tokens: Arc<FakeTokens>,
    ) -> SessionStore<FakeGateway, FakeTokens> {
        SessionStore::new(gateway, tokens, Arc::new(AuthConfig::development()))
    }

    #[tokio::test]
    async fn test_bootstrap_runs_once() {
        let gateway = Arc::new(FakeGateway::default());
        let tokens = Arc::new(FakeTokens::default());
        *tokens.stored.lock().unwrap() = Some(BearerToken::new("t"));
        gateway.push_profile(Ok(profile(1, UserType::Client)));
        let store = store(gateway.clone(), tokens);

        assert!(store.bootstrap().await.is_authenticated());
        assert!(store.bootstrap().await.is_authenticated());
        assert_eq!(*gateway.profile_calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_failure_restores_credential() {
        let gateway = Arc::new(FakeGateway::default());
        let tokens = Arc::new(FakeTokens::default());
        *gateway.issued.lock().unwrap() = Some(BearerToken::new("new"));
        gateway.push_profile(Err(AuthError::Internal("boom".into())));
        gateway.set_credential(Some(BearerToken::new("old"))).await;
        let store = store(gateway.clone(), tokens.clone());
        store.bootstrap().await;

        let err = store
            .sign_in(&SignInCredentials::new("a@b.c", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Internal(_)));
        assert_eq!(gateway.credential(), Some(BearerToken::new("old")));
        assert!(tokens.stored.lock().unwrap().is_none());
        assert!(!store.snapshot().is_authenticated());
    }

    #[tokio::test]
    async fn test_update_user_requires_session() {
        let store = store(Arc::default(), Arc::default());
        store.bootstrap().await;
        assert!(matches!(
            store.update_user().await,
            Err(AuthError::NotSignedIn)
        ));
    }

    #[tokio::test]
    async fn test_register_adopts_token_and_persists_it() {
        let gateway = Arc::new(FakeGateway::default());
        let tokens = Arc::new(FakeTokens::default());
        gateway.push_profile(Ok(profile(9, UserType::Supplier)));
        let store = store(gateway.clone(), tokens.clone());
        store.bootstrap().await;

        let registration = Registration::client("a@b.c", "pw", "Ana", "Mora", "0912");
        let user = store.register(&registration).await.unwrap();

        assert_eq!(user.id, UserId::new(9));
        assert_eq!(
            *tokens.stored.lock().unwrap(),
            Some(BearerToken::new("registered"))
        );
        assert_eq!(gateway.credential(), Some(BearerToken::new("registered")));
        assert_eq!(store.route(), RootRoute::Home(crate::presentation::navigation::TabSet::Supplier));
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let gateway = Arc::new(FakeGateway::default());
        let store = store(gateway, Arc::default());
        let mut rx = store.subscribe();
        assert_eq!(rx.borrow_and_update().phase(), crate::domain::SessionPhase::Bootstrapping);

        store.bootstrap().await;
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_ready());

        store.sign_out().await.unwrap();
        assert!(rx.borrow_and_update().is_signed_out());
    }
}

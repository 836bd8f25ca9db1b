//! Session Entity
//!
//! The in-memory answer to "who is using the app". One instance per process,
//! owned by [`crate::presentation::store::SessionStore`] and changed only by
//! applying a [`SessionAction`].

use platform::credential::BearerToken;

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::value_object::user_type::UserType;

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Restore attempt still running; only a loading screen may be shown
    #[default]
    Bootstrapping,
    /// Restore attempt finished (successfully or not)
    Ready,
}

/// Token and profile of a signed-in account
///
/// Kept together so a profile can never exist without its token.
#[derive(Debug, Clone, PartialEq)]
pub struct Authenticated {
    pub token: BearerToken,
    pub user: UserProfile,
}

/// Session state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    phase: SessionPhase,
    auth: Option<Authenticated>,
    is_signed_out: bool,
}

/// Every transition the session can make
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Bootstrap finished, with the restored account if the token was accepted
    Restored(Option<Authenticated>),
    SignedIn(Authenticated),
    SignedOut,
    /// Fresh profile for the current account
    UserUpdated(UserProfile),
}

impl Session {
    /// Initial state at process start
    pub fn bootstrapping() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == SessionPhase::Ready
    }

    pub fn auth(&self) -> Option<&Authenticated> {
        self.auth.as_ref()
    }

    pub fn token(&self) -> Option<&BearerToken> {
        self.auth.as_ref().map(|a| &a.token)
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.auth.as_ref().map(|a| &a.user)
    }

    /// Role of the current account, read from the latest profile
    pub fn user_type(&self) -> Option<UserType> {
        self.user().map(|u| u.user_type)
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Whether the last transition was an explicit sign-out
    pub fn is_signed_out(&self) -> bool {
        self.is_signed_out
    }

    /// Apply a transition
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::Restored(auth) => {
                self.phase = SessionPhase::Ready;
                self.auth = auth;
            }
            SessionAction::SignedIn(auth) => {
                self.phase = SessionPhase::Ready;
                self.auth = Some(auth);
                self.is_signed_out = false;
            }
            SessionAction::SignedOut => {
                self.phase = SessionPhase::Ready;
                self.auth = None;
                self.is_signed_out = true;
            }
            SessionAction::UserUpdated(user) => match self.auth.as_mut() {
                Some(auth) => auth.user = user,
                None => {
                    tracing::warn!(user_id = %user.id, "Profile update without a session ignored");
                }
            },
        }
    }

    /// Consuming form of [`Session::apply`]
    pub fn reduce(mut self, action: SessionAction) -> Self {
        self.apply(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::UserId;

    fn profile(id: u64, user_type: UserType) -> UserProfile {
        let mut user: UserProfile =
            serde_json::from_value(serde_json::json!({ "id": id })).unwrap();
        user.user_type = user_type;
        user
    }

    fn authenticated(token: &str, user_type: UserType) -> Authenticated {
        Authenticated {
            token: BearerToken::new(token),
            user: profile(1, user_type),
        }
    }

    #[test]
    fn test_initial_state() {
        let session = Session::bootstrapping();
        assert_eq!(session.phase(), SessionPhase::Bootstrapping);
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(!session.is_signed_out());
    }

    #[test]
    fn test_restored_settles_ready() {
        let session = Session::bootstrapping().reduce(SessionAction::Restored(None));
        assert!(session.is_ready());
        assert!(session.token().is_none());

        let session = Session::bootstrapping()
            .reduce(SessionAction::Restored(Some(authenticated("t", UserType::Client))));
        assert!(session.is_ready());
        assert_eq!(session.user().map(|u| u.id), Some(UserId::new(1)));
    }

    #[test]
    fn test_sign_in_then_out() {
        let session = Session::bootstrapping()
            .reduce(SessionAction::Restored(None))
            .reduce(SessionAction::SignedIn(authenticated("t", UserType::Supplier)));
        assert_eq!(session.user_type(), Some(UserType::Supplier));
        assert!(!session.is_signed_out());

        let session = session.reduce(SessionAction::SignedOut);
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(session.is_signed_out());

        let session = session.reduce(SessionAction::SignedIn(authenticated("u", UserType::Client)));
        assert!(!session.is_signed_out());
    }

    #[test]
    fn test_user_updated_replaces_profile() {
        let session = Session::bootstrapping()
            .reduce(SessionAction::SignedIn(authenticated("t", UserType::Client)))
            .reduce(SessionAction::UserUpdated(profile(1, UserType::Supplier)));
        assert_eq!(session.user_type(), Some(UserType::Supplier));
        assert_eq!(session.token(), Some(&BearerToken::new("t")));
    }

    #[test]
    fn test_user_updated_without_session_is_ignored() {
        let before = Session::bootstrapping().reduce(SessionAction::Restored(None));
        let after = before
            .clone()
            .reduce(SessionAction::UserUpdated(profile(2, UserType::Client)));
        assert_eq!(before, after);
    }
}

//! Root route selection
//!
//! Which top-level view a front end shows for a given session. Always
//! computed from the current [`Session`], never stored.

use std::fmt;

use crate::domain::entity::session::{Session, SessionPhase};
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::value_object::user_type::UserType;

/// Bottom tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Client: requests the client created
    MyOrders,
    /// Both roles: service catalogue
    Services,
    /// Client: offers received
    Bids,
    /// Supplier: accepted jobs to carry out
    ToDo,
    /// Supplier: open requests to bid on
    Auction,
}

impl Tab {
    pub const fn label(&self) -> &'static str {
        match self {
            Tab::MyOrders => "Mis Ordenes",
            Tab::Services => "Servicios",
            Tab::Bids => "Puja",
            Tab::ToDo => "Por Realizar",
            Tab::Auction => "Subasta",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tab set of the signed-in home view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSet {
    Client,
    Supplier,
}

impl TabSet {
    pub const fn for_type(user_type: UserType) -> Self {
        match user_type {
            UserType::Client => TabSet::Client,
            UserType::Supplier => TabSet::Supplier,
        }
    }

    pub fn for_user(user: &UserProfile) -> Self {
        Self::for_type(user.user_type)
    }

    /// Tabs in display order
    pub const fn tabs(&self) -> [Tab; 3] {
        match self {
            TabSet::Client => [Tab::MyOrders, Tab::Services, Tab::Bids],
            TabSet::Supplier => [Tab::ToDo, Tab::Services, Tab::Auction],
        }
    }

    pub const fn initial_tab(&self) -> Tab {
        Tab::Services
    }
}

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootRoute {
    /// Bootstrap still running
    Splash,
    /// Welcome, sign-in and registration screens
    SignedOut,
    Home(TabSet),
}

impl RootRoute {
    pub fn for_session(session: &Session) -> Self {
        match (session.phase(), session.user()) {
            (SessionPhase::Bootstrapping, _) => RootRoute::Splash,
            (SessionPhase::Ready, None) => RootRoute::SignedOut,
            (SessionPhase::Ready, Some(user)) => RootRoute::Home(TabSet::for_user(user)),
        }
    }
}

impl fmt::Display for RootRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootRoute::Splash => f.write_str("splash"),
            RootRoute::SignedOut => f.write_str("signed-out"),
            RootRoute::Home(TabSet::Client) => f.write_str("home (client)"),
            RootRoute::Home(TabSet::Supplier) => f.write_str("home (supplier)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::session::{Authenticated, SessionAction};
    use platform::credential::BearerToken;

    fn signed_in(user_type: &str) -> Session {
        let user: UserProfile =
            serde_json::from_value(serde_json::json!({"id": 1, "type": user_type})).unwrap();
        Session::bootstrapping().reduce(SessionAction::SignedIn(Authenticated {
            token: BearerToken::new("t"),
            user,
        }))
    }

    #[test]
    fn test_route_per_phase() {
        assert_eq!(RootRoute::for_session(&Session::bootstrapping()), RootRoute::Splash);

        let ready = Session::bootstrapping().reduce(SessionAction::Restored(None));
        assert_eq!(RootRoute::for_session(&ready), RootRoute::SignedOut);
    }

    #[test]
    fn test_route_per_role() {
        assert_eq!(
            RootRoute::for_session(&signed_in("supplier")),
            RootRoute::Home(TabSet::Supplier)
        );
        assert_eq!(
            RootRoute::for_session(&signed_in("client")),
            RootRoute::Home(TabSet::Client)
        );
    }

    #[test]
    fn test_tab_sets() {
        let labels: Vec<_> = TabSet::Supplier.tabs().iter().map(Tab::label).collect();
        assert_eq!(labels, ["Por Realizar", "Servicios", "Subasta"]);

        let labels: Vec<_> = TabSet::Client.tabs().iter().map(Tab::label).collect();
        assert_eq!(labels, ["Mis Ordenes", "Servicios", "Puja"]);

        assert_eq!(TabSet::Client.initial_tab(), Tab::Services);
        assert_eq!(TabSet::Supplier.initial_tab(), Tab::Services);
    }
}

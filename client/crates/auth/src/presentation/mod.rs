//! Presentation Layer
//!
//! What front ends consume: the session store and root route selection.

pub mod navigation;
pub mod store;

pub use navigation::{RootRoute, Tab, TabSet};
pub use store::{HttpSessionStore, SessionStore};

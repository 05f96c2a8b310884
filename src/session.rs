//! Auth Session Context
//!
//! Current user held in memory for the tab's lifetime, with role-check
//! predicates. Injected via context rather than reached as a global so the
//! panels stay independently testable.

use leptos::prelude::*;

use crate::api::Api;
use crate::models::{Role, Session, User};

#[derive(Clone, Copy)]
pub struct AuthSession {
    user: RwSignal<Option<User>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.with(|u| u.as_ref().map(|u| u.role))
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Store the session and arm the API client with its bearer token.
    pub fn log_in(&self, api: &Api, session: Session) {
        api.set_token(Some(session.token));
        self.user.set(Some(session.user));
    }

    /// Drop the in-memory session and the API token.
    pub fn log_out(&self, api: &Api) {
        api.set_token(None);
        self.user.set(None);
    }
}

pub fn use_session() -> AuthSession {
    use_context::<AuthSession>().expect("AuthSession should be provided")
}

//! In-memory auth store holding the bearer token and the signed-in user.

use std::io;
use std::path::Path;

use tokio::sync::watch;

use crate::domain::user::User;
use crate::models::session::PersistedSession;
use crate::repository::TokenSource;

/// Current session; `None` when signed out.
pub type SessionState = Option<PersistedSession>;

pub struct AuthStore {
    state: watch::Sender<SessionState>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self { state }
    }

    pub fn login(&self, session: PersistedSession) {
        log::info!("Session started for user {}", session.user.id);
        self.state.send_replace(Some(session));
    }

    /// Restores the session written by the login flow. Returns whether one was found.
    pub fn load_persisted(&self, path: impl AsRef<Path>) -> io::Result<bool> {
        match PersistedSession::read_from(path)? {
            Some(session) => {
                self.login(session);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn logout(&self) {
        if self.state.send_replace(None).is_some() {
            log::info!("Session closed");
        }
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().as_ref().map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Delete controls are shown only when this is true.
    pub fn can_manage(&self) -> bool {
        self.state
            .borrow()
            .as_ref()
            .is_some_and(|s| s.user.can_manage())
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}

impl TokenSource for AuthStore {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }
}

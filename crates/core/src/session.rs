//! Client-side session lifecycle
//!
//! A session has two states, authenticated and unauthenticated, plus a
//! loading flag that is set until the token store has been read once. The
//! only way in is [`Session::login`]; the ways out are an explicit
//! [`Session::logout`] and a [`Session::handle_session_expired`] triggered by
//! a 401 from the backend. Neither exit calls the server.

use crate::config::StorageKeys;
use crate::error::CoreResult;
use crate::notify::Toast;
use crate::storage::TokenStore;
use tracing::{debug, info};

/// Route the user is sent to when a session ends
pub const ENTRY_ROUTE: &str = "/";

/// Snapshot of the authentication state exposed to components
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl SessionState {
    /// State before the token store has been read
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            is_authenticated: false,
            is_loading: true,
        }
    }

    #[must_use]
    pub const fn authenticated() -> Self {
        Self {
            is_authenticated: true,
            is_loading: false,
        }
    }

    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self {
            is_authenticated: false,
            is_loading: false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::loading()
    }
}

/// Why a session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Logout,
    Expired,
}

impl EndReason {
    /// Notification shown when the session ends for this reason
    #[must_use]
    pub fn toast(self) -> Toast {
        match self {
            Self::Logout => Toast::success("Sesión cerrada")
                .description("Has cerrado sesión correctamente."),
            Self::Expired => Toast::error("Sesión expirada")
                .description("Tu sesión ha expirado. Inicia sesión nuevamente."),
        }
    }
}

/// Signals the HTTP layer raises about the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected the token, or no token was stored for a request
    /// that needs one
    Expired,
}

/// Side effects a session needs from the UI: notifications and navigation
#[cfg_attr(test, mockall::automock)]
pub trait SessionEffects {
    fn notify(&self, toast: Toast);

    fn navigate(&self, path: &str);
}

/// Session state bound to a token store
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    state: SessionState,
}

impl<S: TokenStore> Session<S> {
    /// Create a session in the loading state
    pub const fn new(store: S) -> Self {
        Self {
            store,
            state: SessionState::loading(),
        }
    }

    /// Create a session and immediately read the token store
    pub fn restored(store: S) -> Self {
        let mut session = Self::new(store);
        session.restore();
        session
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the token store once and settle the loading flag
    pub fn restore(&mut self) -> SessionState {
        self.state = if self.store.token().is_some() {
            debug!("Restored session from stored token");
            SessionState::authenticated()
        } else {
            SessionState::unauthenticated()
        };
        self.state
    }

    /// Store the credentials of a successful sign-in
    pub fn login(&mut self, token: &str, username: Option<&str>) -> CoreResult<SessionState> {
        self.store.set_token(token)?;
        if let Some(username) = username {
            self.store.set(StorageKeys::USERNAME, username)?;
        }
        info!("Session started");
        self.state = SessionState::authenticated();
        Ok(self.state)
    }

    /// End the session at the user's request
    pub fn logout<E: SessionEffects + ?Sized>(&mut self, effects: &E) -> SessionState {
        self.end(EndReason::Logout, effects)
    }

    /// End the session because the backend rejected the token
    pub fn handle_session_expired<E: SessionEffects + ?Sized>(&mut self, effects: &E) -> SessionState {
        self.end(EndReason::Expired, effects)
    }

    /// React to a signal from the HTTP layer. Returns whether the session
    /// ended.
    ///
    /// Concurrent failing requests report several events; only the first one
    /// still finds a token to clear, the rest are ignored.
    pub fn on_event<E: SessionEffects + ?Sized>(&mut self, event: SessionEvent, effects: &E) -> bool {
        match event {
            SessionEvent::Expired if self.store.token().is_some() => {
                self.handle_session_expired(effects);
                true
            }
            SessionEvent::Expired => {
                debug!("Ignoring expiry, no active session");
                self.state = SessionState::unauthenticated();
                false
            }
        }
    }

    fn end<E: SessionEffects + ?Sized>(&mut self, reason: EndReason, effects: &E) -> SessionState {
        info!(?reason, "Session ended");
        self.store.clear_session();
        self.state = SessionState::unauthenticated();
        effects.notify(reason.toast());
        effects.navigate(ENTRY_ROUTE);
        self.state
    }
}

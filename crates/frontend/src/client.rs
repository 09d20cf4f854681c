//! Client configuration and initialization

use crate::storage::BrowserStore;
use fiscamoto_core::{AppConfig, TokenStore};
use fiscamoto_http::{AuthenticatedClient, ClientBuilder, ClientError, PublicClient, SessionEvent};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use std::cell::RefCell;

thread_local! {
    /// Listener for session events, installed by the auth provider
    static SESSION_EVENTS: RefCell<Option<UnboundedSender<SessionEvent>>> = const { RefCell::new(None) };

    static CONFIG: AppConfig = AppConfig::from_build_env();
}

/// Configuration baked into this build
pub fn config() -> AppConfig {
    CONFIG.with(Clone::clone)
}

/// Get the base URL for API calls
fn base_url() -> Result<String, ClientError> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();

    config()
        .api_url(&origin)
        .map_err(|e| ClientError::Configuration(e.to_string()))
}

fn session_events() -> Option<UnboundedSender<SessionEvent>> {
    SESSION_EVENTS.with(|events| events.borrow().clone())
}

/// Route session events to a new receiver, replacing any previous one
pub fn subscribe_session_events() -> UnboundedReceiver<SessionEvent> {
    let (tx, rx) = mpsc::unbounded();
    SESSION_EVENTS.with(|events| *events.borrow_mut() = Some(tx));
    rx
}

pub fn unsubscribe_session_events() {
    SESSION_EVENTS.with(|events| *events.borrow_mut() = None);
}

/// Client for unauthenticated endpoints
pub fn create_public_client() -> Result<PublicClient, ClientError> {
    ClientBuilder::new().base_url(base_url()?).build_public()
}

/// Client carrying the token currently in storage.
///
/// The token is read on every call. A missing token is reported as an
/// expired session by the builder.
pub fn create_authenticated_client() -> Result<AuthenticatedClient, ClientError> {
    let mut builder = ClientBuilder::new().base_url(base_url()?);
    if let Some(events) = session_events() {
        builder = builder.session_events(events);
    }
    builder.build_authenticated(BrowserStore.token().unwrap_or_default())
}

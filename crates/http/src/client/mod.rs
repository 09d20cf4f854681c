//! Type-safe API clients that enforce authentication requirements at compile time

pub mod auth;
pub mod drivers;
pub mod error;
pub mod licenses;
pub mod tucs;

use error::ClientError;
pub use fiscamoto_core::SessionEvent;
use futures::channel::mpsc::UnboundedSender;
use reqwest::{Client, header};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::{debug, warn};

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for public endpoints that don't require authentication
#[derive(Clone, Debug)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedClient {
    client: Client,
    base_url: String,
    token: String,
    events: Option<UnboundedSender<SessionEvent>>,
}

fn build_http_client() -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let builder = Client::builder()
        .user_agent(concat!("fiscamoto/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT);

    // The browser's fetch owns timeouts on wasm
    #[cfg(target_arch = "wasm32")]
    let builder = Client::builder();

    Ok(builder.build()?)
}

/// Check the status of a response, turning failures into [`ClientError`]
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::from_body(status, &body))
}

impl PublicClient {
    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = check_status(request.send().await?).await?;
        Ok(response.json().await?)
    }
}

impl AuthenticatedClient {
    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and decode its JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// Execute a request whose body, if any, is not needed
    pub async fn execute_unit(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        self.send(request).await.map(drop)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let result = match request.send().await {
            Ok(response) => check_status(response).await,
            Err(e) => Err(e.into()),
        };

        if let Err(error) = &result {
            if error.is_auth_expired() {
                self.report(SessionEvent::Expired);
            } else {
                debug!("Request failed: {error}");
            }
        }
        result
    }

    fn report(&self, event: SessionEvent) {
        if let Some(events) = &self.events {
            if events.unbounded_send(event).is_err() {
                warn!(?event, "Session event dropped, no listener");
            }
        }
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    events: Option<UnboundedSender<SessionEvent>>,
}

impl ClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Channel receiving [`SessionEvent`]s from authenticated clients
    #[must_use]
    pub fn session_events(mut self, events: UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(events);
        self
    }

    fn base(&self) -> Result<String, ClientError> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        Ok(base_url.trim_end_matches('/').to_string())
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicClient, ClientError> {
        Ok(PublicClient {
            base_url: self.base()?,
            client: build_http_client()?,
        })
    }

    /// Build an authenticated client.
    ///
    /// A missing token is reported on the session channel as
    /// [`SessionEvent::Expired`], the same way a 401 would be.
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedClient, ClientError> {
        let token = token.into();
        if token.is_empty() {
            if let Some(events) = &self.events {
                if events.unbounded_send(SessionEvent::Expired).is_err() {
                    warn!("No session listener for missing token");
                }
            }
            return Err(ClientError::NotAuthenticated);
        }

        Ok(AuthenticatedClient {
            base_url: self.base()?,
            client: build_http_client()?,
            token,
            events: self.events,
        })
    }
}

//! FISCAMOTO HTTP client
//!
//! Thin typed wrappers over the backend REST API. Authentication failures are
//! reported on an explicit [`client::SessionEvent`] channel so the session
//! layer can react without the client knowing about it.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{AuthenticatedClient, ClientBuilder, PublicClient, SessionEvent};

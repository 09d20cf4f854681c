//! Authentication module

pub mod context;

pub use context::{use_auth, AuthProvider};

//! Sign-in and profile service

use crate::client::{create_authenticated_client, create_public_client};
use fiscamoto_core::RawProfile;
use fiscamoto_http::types::{SigninRequest, SigninResponse};
use fiscamoto_http::ClientError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AuthService;

impl AuthService {
    pub const fn new() -> Self {
        Self
    }

    /// Exchange credentials for a token
    pub async fn signin(&self, username: &str, password: &str) -> Result<SigninResponse, ClientError> {
        let client = create_public_client()?;
        client
            .signin(&SigninRequest {
                username: username.trim().to_string(),
                password: password.to_string(),
            })
            .await
    }

    /// Profile of the signed-in user
    pub async fn fetch_profile(&self) -> Result<RawProfile, ClientError> {
        create_authenticated_client()?.current_user().await
    }

    /// Ask the backend whether the stored token is still valid
    pub async fn verify(&self) -> Result<(), ClientError> {
        create_authenticated_client()?.verify().await
    }
}

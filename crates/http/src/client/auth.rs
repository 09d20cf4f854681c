//! Authentication endpoints

use super::{AuthenticatedClient, ClientError, PublicClient};
use crate::types::{SigninRequest, SigninResponse};
use fiscamoto_core::user::{ProfileEnvelope, RawProfile};

impl PublicClient {
    /// Exchange credentials for a bearer token
    pub async fn signin(&self, request: &SigninRequest) -> Result<SigninResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/signin")
            .json(request);
        self.execute(req).await
    }
}

impl AuthenticatedClient {
    /// Check that the token is still accepted
    pub async fn verify(&self) -> Result<(), ClientError> {
        let req = self.request(reqwest::Method::GET, "/auth/verify");
        self.execute_unit(req).await
    }

    /// Profile of the signed-in user, unwrapped from its envelope
    pub async fn current_user(&self) -> Result<RawProfile, ClientError> {
        let req = self.request(reqwest::Method::GET, "/users/me");
        let envelope: ProfileEnvelope = self.execute(req).await?;
        Ok(envelope.into_profile())
    }
}

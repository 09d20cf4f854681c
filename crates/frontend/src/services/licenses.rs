//! License service

use crate::client::create_authenticated_client;
use fiscamoto_core::{EntityId, LicenseForm};
use fiscamoto_http::ClientError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LicenseService;

impl LicenseService {
    pub const fn new() -> Self {
        Self
    }

    /// Register a license for `conductor_id`.
    ///
    /// Returns the backend confirmation message, if it sent one.
    pub async fn create_license(
        &self,
        conductor_id: EntityId,
        form: LicenseForm,
    ) -> Result<Option<String>, ClientError> {
        let request = form
            .into_request(conductor_id)
            .map_err(|e| ClientError::BadRequest(e.to_string()))?;
        let response = create_authenticated_client()?.create_license(&request).await?;
        Ok(response.message)
    }

    pub async fn delete_license(&self, id: &EntityId) -> Result<(), ClientError> {
        create_authenticated_client()?.delete_license(id).await
    }
}

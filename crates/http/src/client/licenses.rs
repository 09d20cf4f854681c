//! License endpoints

use super::{AuthenticatedClient, ClientError};
use crate::types::ApiMessage;
use fiscamoto_core::{CreateLicenseRequest, EntityId};
use tracing::info;

impl AuthenticatedClient {
    /// Register a license for the driver named in the request.
    ///
    /// The created record is returned untyped; callers reload the list.
    pub async fn create_license(
        &self,
        request: &CreateLicenseRequest,
    ) -> Result<ApiMessage<serde_json::Value>, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/licenses")
            .json(request);
        let response = self.execute(req).await?;
        info!(conductor_id = %request.conductor_id, "License created");
        Ok(response)
    }

    pub async fn delete_license(&self, license_id: &EntityId) -> Result<(), ClientError> {
        let req = self.request(reqwest::Method::DELETE, &format!("/licenses/{license_id}"));
        self.execute_unit(req).await
    }
}

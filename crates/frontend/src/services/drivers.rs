//! Driver (conductor) service

use crate::client::create_authenticated_client;
use fiscamoto_core::{Driver, EntityId, License, Paginated};
use fiscamoto_http::types::ListQuery;
use fiscamoto_http::ClientError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriverService;

impl DriverService {
    pub const fn new() -> Self {
        Self
    }

    /// List drivers with pagination and an optional search term
    pub async fn list_drivers(
        &self,
        page: u32,
        limit: u32,
        search: &str,
    ) -> Result<Paginated<Driver>, ClientError> {
        let client = create_authenticated_client()?;
        client
            .list_drivers(&ListQuery::new(page, limit).search(search))
            .await
    }

    pub async fn delete_driver(&self, id: &EntityId) -> Result<(), ClientError> {
        create_authenticated_client()?.delete_driver(id).await
    }

    /// Licenses held by one driver
    pub async fn licenses(&self, id: &EntityId) -> Result<Vec<License>, ClientError> {
        create_authenticated_client()?.driver_licenses(id).await
    }
}

//! Driver ("conductor") endpoints

use super::{AuthenticatedClient, ClientError};
use crate::types::ListQuery;
use fiscamoto_core::{Driver, EntityId, License, Paginated};

impl AuthenticatedClient {
    /// One page of drivers, optionally filtered by a search term
    pub async fn list_drivers(&self, query: &ListQuery) -> Result<Paginated<Driver>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/conductores")
            .query(query);
        self.execute(req).await
    }

    pub async fn delete_driver(&self, driver_id: &EntityId) -> Result<(), ClientError> {
        let req = self.request(reqwest::Method::DELETE, &format!("/conductores/{driver_id}"));
        self.execute_unit(req).await
    }

    /// Licenses held by a driver
    pub async fn driver_licenses(&self, driver_id: &EntityId) -> Result<Vec<License>, ClientError> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Licenses {
            Wrapped { data: Vec<License> },
            Direct(Vec<License>),
        }

        let req = self.request(
            reqwest::Method::GET,
            &format!("/conductores/{driver_id}/licenses"),
        );
        Ok(match self.execute(req).await? {
            Licenses::Wrapped { data } | Licenses::Direct(data) => data,
        })
    }
}

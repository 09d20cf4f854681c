//! Documentation ("tuc") endpoints

use super::{AuthenticatedClient, ClientError};
use crate::types::ListQuery;
use fiscamoto_core::{Paginated, Tuc};

impl AuthenticatedClient {
    pub async fn list_tucs(&self, query: &ListQuery) -> Result<Paginated<Tuc>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/tucs").query(query);
        self.execute(req).await
    }
}

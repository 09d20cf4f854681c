//! TUC (tarjeta única de circulación) service

use crate::client::create_authenticated_client;
use fiscamoto_core::{Paginated, Tuc};
use fiscamoto_http::types::ListQuery;
use fiscamoto_http::ClientError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TucService;

impl TucService {
    pub const fn new() -> Self {
        Self
    }

    pub async fn list_tucs(&self, page: u32, limit: u32, search: &str) -> Result<Paginated<Tuc>, ClientError> {
        create_authenticated_client()?
            .list_tucs(&ListQuery::new(page, limit).search(search))
            .await
    }
}

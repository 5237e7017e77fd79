//! Usage endpoint.

use lava_core::{Usage, UsageParams};
use reqwest::Method;

use crate::client::{LavaClient, RequestOptions};
use crate::error::ClientError;
use crate::query::QueryParams;

/// Usage endpoint.
#[derive(Debug, Clone, Copy)]
pub struct UsageResource<'a> {
    client: &'a LavaClient,
}

impl<'a> UsageResource<'a> {
    pub(crate) fn new(client: &'a LavaClient) -> Self {
        Self { client }
    }

    /// Retrieve aggregated usage statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn retrieve(&self, params: &UsageParams) -> Result<Usage, ClientError> {
        let query = usage_query(params)?;
        self.client
            .request(Method::GET, "usage", RequestOptions::new().query(query))
            .await
    }
}

fn usage_query(params: &UsageParams) -> Result<QueryParams, ClientError> {
    let mut query = QueryParams::new();
    query
        .push("start", &params.start)
        .push_opt("end", params.end.as_deref())
        .push_opt("connection_id", params.connection_id.as_ref())
        .push_opt("product_id", params.product_id.as_ref())
        .push_metadata_filters("metadata_filters", params.metadata_filters.as_ref())?;
    Ok(query)
}

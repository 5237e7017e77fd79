//! Request endpoints.

use futures::Stream;
use lava_core::{CreateRequestParams, ListResponse, Request, RequestsListParams};
use reqwest::Method;

use super::{paginate, path_segment};
use crate::client::{LavaClient, RequestOptions};
use crate::error::ClientError;
use crate::query::QueryParams;

/// Request (usage record) endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Requests<'a> {
    client: &'a LavaClient,
}

impl<'a> Requests<'a> {
    pub(crate) fn new(client: &'a LavaClient) -> Self {
        Self { client }
    }

    /// List requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(
        &self,
        params: &RequestsListParams,
    ) -> Result<ListResponse<Request>, ClientError> {
        let query = list_query(params)?;
        self.client
            .request(Method::GET, "requests", RequestOptions::new().query(query))
            .await
    }

    /// Stream every request matching `params`, following cursors.
    pub fn list_all(
        &self,
        params: RequestsListParams,
    ) -> impl Stream<Item = Result<Request, ClientError>> + 'a {
        let client = self.client;
        paginate(params.cursor.clone(), move |cursor| {
            let page_params = RequestsListParams {
                cursor,
                ..params.clone()
            };
            async move {
                let query = list_query(&page_params)?;
                client
                    .request::<ListResponse<Request>>(
                        Method::GET,
                        "requests",
                        RequestOptions::new().query(query),
                    )
                    .await
            }
        })
    }

    /// Report a request that did not go through the forward endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(&self, params: &CreateRequestParams) -> Result<Request, ClientError> {
        let options = RequestOptions::new().json(params)?;
        self.client
            .request(Method::POST, "requests", options)
            .await
    }

    /// Retrieve a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn retrieve(&self, request_id: impl AsRef<str>) -> Result<Request, ClientError> {
        let path = format!("requests/{}", path_segment(request_id.as_ref()));
        self.client
            .request(Method::GET, &path, RequestOptions::new())
            .await
    }
}

fn list_query(params: &RequestsListParams) -> Result<QueryParams, ClientError> {
    let mut query = QueryParams::new();
    query
        .push_opt("cursor", params.cursor.as_deref())
        .push_opt("limit", params.limit)
        .push_opt("connection_id", params.connection_id.as_ref())
        .push_opt("product_id", params.product_id.as_ref())
        .push_metadata_filters("metadata_filters", params.metadata_filters.as_ref())?;
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lava_core::{ConnectionId, MetadataFilters};

    #[test]
    fn list_query_maps_every_filter() {
        let mut filters = MetadataFilters::new();
        filters.insert("feature".into(), "chat".into());

        let query = list_query(&RequestsListParams {
            cursor: None,
            limit: Some(10),
            connection_id: Some(ConnectionId::new("conn_1")),
            product_id: None,
            metadata_filters: Some(filters),
        })
        .unwrap();

        assert_eq!(query.get("cursor"), None);
        assert_eq!(query.get("limit"), Some("10"));
        assert_eq!(query.get("connection_id"), Some("conn_1"));
        assert_eq!(query.get("product_id"), None);
        assert_eq!(query.get("metadata_filters"), Some(r#"[["feature","chat"]]"#));
    }
}

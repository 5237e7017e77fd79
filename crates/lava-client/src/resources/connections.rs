//! Connection endpoints.

use futures::Stream;
use lava_core::{Connection, ConnectionsListParams, DeleteConnectionResponse, ListResponse};
use reqwest::Method;

use super::{paginate, path_segment};
use crate::client::{LavaClient, RequestOptions};
use crate::error::ClientError;
use crate::query::QueryParams;

/// Connection endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Connections<'a> {
    client: &'a LavaClient,
}

impl<'a> Connections<'a> {
    pub(crate) fn new(client: &'a LavaClient) -> Self {
        Self { client }
    }

    /// List connections.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(
        &self,
        params: &ConnectionsListParams,
    ) -> Result<ListResponse<Connection>, ClientError> {
        self.client
            .request(
                Method::GET,
                "connections",
                RequestOptions::new().query(list_query(params)),
            )
            .await
    }

    /// Stream every connection matching `params`, following cursors.
    pub fn list_all(
        &self,
        params: ConnectionsListParams,
    ) -> impl Stream<Item = Result<Connection, ClientError>> + 'a {
        let client = self.client;
        paginate(params.cursor.clone(), move |cursor| {
            let query = list_query(&ConnectionsListParams {
                cursor,
                ..params.clone()
            });
            client.request::<ListResponse<Connection>>(
                Method::GET,
                "connections",
                RequestOptions::new().query(query),
            )
        })
    }

    /// Retrieve a connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn retrieve(&self, connection_id: impl AsRef<str>) -> Result<Connection, ClientError> {
        let path = format!("connections/{}", path_segment(connection_id.as_ref()));
        self.client
            .request(Method::GET, &path, RequestOptions::new())
            .await
    }

    /// Delete a connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn delete(
        &self,
        connection_id: impl AsRef<str>,
    ) -> Result<DeleteConnectionResponse, ClientError> {
        let path = format!("connections/{}", path_segment(connection_id.as_ref()));
        self.client
            .request(Method::DELETE, &path, RequestOptions::new())
            .await
    }
}

fn list_query(params: &ConnectionsListParams) -> QueryParams {
    let mut query = QueryParams::new();
    query
        .push_opt("cursor", params.cursor.as_deref())
        .push_opt("limit", params.limit)
        .push_opt("reference_id", params.reference_id.as_deref());
    query
}

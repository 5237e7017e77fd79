//! Checkout session endpoints.

use futures::Stream;
use lava_core::{
    CheckoutSession, CheckoutSessionsListParams, CreateCheckoutSessionParams, ListResponse,
};
use reqwest::Method;

use super::{paginate, path_segment};
use crate::client::{LavaClient, RequestOptions};
use crate::error::ClientError;
use crate::query::QueryParams;

/// Checkout session endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutSessions<'a> {
    client: &'a LavaClient,
}

impl<'a> CheckoutSessions<'a> {
    pub(crate) fn new(client: &'a LavaClient) -> Self {
        Self { client }
    }

    /// Create a checkout session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create(
        &self,
        params: &CreateCheckoutSessionParams,
    ) -> Result<CheckoutSession, ClientError> {
        let options = RequestOptions::new().json(params)?;
        self.client
            .request(Method::POST, "checkout_sessions", options)
            .await
    }

    /// List checkout sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list(
        &self,
        params: &CheckoutSessionsListParams,
    ) -> Result<ListResponse<CheckoutSession>, ClientError> {
        self.client
            .request(
                Method::GET,
                "checkout_sessions",
                RequestOptions::new().query(list_query(params)),
            )
            .await
    }

    /// Stream every checkout session matching `params`, following cursors.
    pub fn list_all(
        &self,
        params: CheckoutSessionsListParams,
    ) -> impl Stream<Item = Result<CheckoutSession, ClientError>> + 'a {
        let client = self.client;
        paginate(params.cursor.clone(), move |cursor| {
            let query = list_query(&CheckoutSessionsListParams {
                cursor,
                ..params.clone()
            });
            client.request::<ListResponse<CheckoutSession>>(
                Method::GET,
                "checkout_sessions",
                RequestOptions::new().query(query),
            )
        })
    }

    /// Retrieve a checkout session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn retrieve(
        &self,
        checkout_session_id: impl AsRef<str>,
    ) -> Result<CheckoutSession, ClientError> {
        let path = format!(
            "checkout_sessions/{}",
            path_segment(checkout_session_id.as_ref())
        );
        self.client
            .request(Method::GET, &path, RequestOptions::new())
            .await
    }
}

fn list_query(params: &CheckoutSessionsListParams) -> QueryParams {
    let mut query = QueryParams::new();
    query
        .push_opt("cursor", params.cursor.as_deref())
        .push_opt("limit", params.limit)
        .push_opt("reference_id", params.reference_id.as_deref());
    query
}

//! Resource endpoints.
//!
//! Each handle borrows the [`LavaClient`](crate::LavaClient) it came from
//! and maps method calls onto verb, path and query/body.

mod checkout_sessions;
mod connections;
mod requests;
mod usage;

use std::borrow::Cow;
use std::future::Future;

use futures::stream::{self, Stream, TryStreamExt};
use lava_core::ListResponse;
use tracing::{debug, warn};

use crate::error::ClientError;

pub use checkout_sessions::CheckoutSessions;
pub use connections::Connections;
pub use requests::Requests;
pub use usage::UsageResource;

/// Percent-encode an identifier for use as one path segment.
fn path_segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Stream every item of a list endpoint, one page at a time.
///
/// `fetch_page` is called with the cursor of the page to load, starting
/// with `start_cursor`. Paging stops once a page reports `has_more: false`,
/// comes back without a `next_cursor`, or hands back the cursor it was
/// fetched with.
fn paginate<'a, T, F, Fut>(
    start_cursor: Option<String>,
    mut fetch_page: F,
) -> impl Stream<Item = Result<T, ClientError>> + 'a
where
    T: 'a,
    F: FnMut(Option<String>) -> Fut + 'a,
    Fut: Future<Output = Result<ListResponse<T>, ClientError>> + 'a,
{
    stream::try_unfold(Some(start_cursor), move |next| {
        let page = next.map(|cursor| (cursor.clone(), fetch_page(cursor)));
        async move {
            let Some((requested, page)) = page else {
                return Ok::<_, ClientError>(None);
            };
            let page = page.await?;
            debug!(
                items = page.data.len(),
                has_more = page.has_more,
                "fetched Lava list page"
            );

            let following = match page.next_page_cursor() {
                Some(cursor) if requested.as_deref() == Some(cursor) => {
                    warn!(cursor, "list cursor did not advance, stopping");
                    None
                }
                cursor => cursor.map(|cursor| Some(cursor.to_owned())),
            };
            let items = stream::iter(page.data.into_iter().map(Ok::<T, ClientError>));
            Ok(Some((items, following)))
        }
    })
    .try_flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn path_segment_escapes_separators() {
        assert_eq!(path_segment("conn_1"), "conn_1");
        assert_eq!(path_segment("a/b?c"), "a%2Fb%3Fc");
    }

    #[tokio::test]
    async fn paginate_follows_cursors_until_exhausted() {
        let seen = RefCell::new(Vec::new());
        let items: Vec<u32> = paginate(None, |cursor: Option<String>| {
            seen.borrow_mut().push(cursor.clone());
            let page = match cursor.as_deref() {
                None => ListResponse {
                    data: vec![1, 2],
                    has_more: true,
                    next_cursor: Some("c2".into()),
                },
                Some("c2") => ListResponse {
                    data: vec![3],
                    has_more: false,
                    next_cursor: None,
                },
                Some(other) => panic!("unexpected cursor {other}"),
            };
            async move { Ok::<_, ClientError>(page) }
        })
        .try_collect()
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(*seen.borrow(), vec![None, Some("c2".to_string())]);
    }

    #[tokio::test]
    async fn paginate_stops_when_cursor_missing() {
        let calls = RefCell::new(0);
        let items: Vec<u32> = paginate(Some("start".into()), |_cursor| {
            *calls.borrow_mut() += 1;
            async move {
                Ok::<_, ClientError>(ListResponse {
                    data: vec![7],
                    has_more: true,
                    next_cursor: None,
                })
            }
        })
        .try_collect()
        .await
        .unwrap();

        assert_eq!(items, vec![7]);
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test]
    async fn paginate_stops_when_cursor_repeats() {
        let calls = RefCell::new(0);
        let items: Vec<u32> = paginate(None, |_cursor| {
            *calls.borrow_mut() += 1;
            let n = *calls.borrow();
            async move {
                Ok::<_, ClientError>(ListResponse {
                    data: vec![n],
                    has_more: true,
                    next_cursor: Some("stuck".into()),
                })
            }
        })
        .try_collect()
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2]);
        assert_eq!(*calls.borrow(), 2);
    }

    #[tokio::test]
    async fn paginate_surfaces_errors() {
        let result: Result<Vec<u32>, ClientError> = paginate(None, |_cursor| async {
            Err::<ListResponse<u32>, _>(ClientError::Configuration("boom".into()))
        })
        .try_collect()
        .await;

        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }
}

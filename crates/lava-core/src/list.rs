//! Cursor-paginated list envelopes.

use serde::{Deserialize, Serialize};

/// A page of results from a list endpoint.
///
/// `next_cursor` is opaque; pass it back unchanged as the `cursor` of the
/// next list call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items on this page, in server order.
    pub data: Vec<T>,
    /// Whether more items exist after this page.
    pub has_more: bool,
    /// Continuation token for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl<T> ListResponse<T> {
    /// Cursor for the following page, if the server says there is one.
    ///
    /// Returns `None` when `has_more` is false, and also when the server
    /// claims more data but omits the cursor.
    #[must_use]
    pub fn next_page_cursor(&self) -> Option<&str> {
        if self.has_more {
            self.next_cursor.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_without_cursor() {
        let page: ListResponse<serde_json::Value> =
            serde_json::from_str(r#"{"data": [], "has_more": false}"#).unwrap();
        assert!(page.data.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.next_cursor, None);
        assert_eq!(page.next_page_cursor(), None);
    }

    #[test]
    fn next_page_cursor_requires_has_more() {
        let page = ListResponse::<u32> {
            data: vec![1],
            has_more: false,
            next_cursor: Some("stale".into()),
        };
        assert_eq!(page.next_page_cursor(), None);

        let page = ListResponse::<u32> {
            data: vec![1],
            has_more: true,
            next_cursor: Some("c2".into()),
        };
        assert_eq!(page.next_page_cursor(), Some("c2"));
    }
}

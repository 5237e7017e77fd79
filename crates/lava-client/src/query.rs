//! Query string construction.

use std::fmt::Display;

use lava_core::MetadataFilters;

use crate::error::ClientError;

/// Ordered query parameters for a request.
///
/// Only values that are present get pushed, so an empty builder produces a
/// URL with no query string at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty set of parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value`.
    pub fn push(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append `key=value` when `value` is `Some`.
    ///
    /// `Some(0)` and `Some("")` are sent; only `None` is skipped.
    pub fn push_opt<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Append metadata filters as a JSON array of `[key, value]` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the filters cannot be serialized.
    pub fn push_metadata_filters(
        &mut self,
        key: &str,
        filters: Option<&MetadataFilters>,
    ) -> Result<&mut Self, ClientError> {
        if let Some(filters) = filters {
            let entries: Vec<(&String, &String)> = filters.iter().collect();
            let encoded = serde_json::to_string(&entries)?;
            self.push(key, encoded);
        }
        Ok(self)
    }

    /// Whether no parameters were pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Parameters in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Value of the first parameter named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

//! Usage aggregates.

use serde::{Deserialize, Serialize};

use crate::ids::{ConnectionId, ProductId};
use crate::money::Amount;
use crate::request::MetadataFilters;

/// Aggregated usage over a time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    /// One bucket per day in the range.
    pub items: Vec<UsageItem>,
    /// Sums over the whole range.
    pub totals: UsageTotals,
}

/// Usage for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageItem {
    /// The day, as formatted by the API (`YYYY-MM-DD`).
    pub date: String,
    /// Sums for this day.
    #[serde(flatten)]
    pub totals: UsageTotals,
}

/// Request, token and cost sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageTotals {
    /// Number of requests.
    pub total_requests: u64,
    /// Number of tokens.
    pub total_usage_tokens: u64,
    /// Provider usage cost.
    pub total_usage_cost: Amount,
    /// Merchant fees.
    pub total_fee_amount: Amount,
    /// Lava service charges.
    pub total_service_charge_amount: Amount,
    /// Everything combined.
    pub total_request_cost: Amount,
    /// Portion charged to wallets.
    pub total_wallet_cost: Amount,
    /// Portion charged to the merchant.
    pub total_merchant_cost: Amount,
}

/// Query parameters of `GET usage`.
///
/// `start` and `end` are passed through as given; the API accepts ISO 8601
/// dates or datetimes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageParams {
    /// Start of the range (inclusive).
    pub start: String,
    /// End of the range. Defaults to now on the server.
    pub end: Option<String>,
    /// Only usage billed to this connection.
    pub connection_id: Option<ConnectionId>,
    /// Only usage priced by this product.
    pub product_id: Option<ProductId>,
    /// Only usage whose request metadata matches every pair.
    pub metadata_filters: Option<MetadataFilters>,
}

impl UsageParams {
    /// Usage from `start` until now.
    #[must_use]
    pub fn since(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            ..Self::default()
        }
    }
}

//! Request (usage record) types.
//!
//! Every call forwarded through Lava, or reported with `POST requests`,
//! produces a [`Request`]: what was used, what it cost, and who paid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::{ConnectionId, ProductId, RequestId};
use crate::money::Amount;

/// Exact-match metadata filters for list and usage queries.
///
/// Sent on the wire as a JSON array of `[key, value]` pairs.
pub type MetadataFilters = BTreeMap<String, String>;

/// Lifecycle status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Upstream call still in flight.
    Pending,
    /// Upstream call finished and was billed.
    Completed,
    /// Upstream call failed.
    Error,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Who holds the provider API key used for the upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKeyType {
    /// Lava's own provider key.
    Managed,
    /// The merchant's provider key.
    Unmanaged,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Party charged for a cost component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payer {
    /// The end user's wallet.
    Wallet,
    /// The merchant.
    Merchant,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// How the merchant fee is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateType {
    /// Fixed price per unit.
    Fixed,
    /// Percentage of the usage cost.
    Percentage,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Which tokens count toward the fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenBasis {
    /// Input and output tokens.
    #[serde(rename = "input+output")]
    InputOutput,
    /// Output tokens only.
    #[serde(rename = "output")]
    Output,
    /// A value this client does not know yet.
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// Unit a fee tier is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierType {
    /// Per million tokens.
    #[serde(rename = "tokens_1m")]
    Tokens1M,
    /// Per million characters.
    #[serde(rename = "characters_1m")]
    Characters1M,
    /// Per minute.
    #[serde(rename = "minutes")]
    Minutes,
    /// A value this client does not know yet.
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// A metered request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Request identifier.
    pub request_id: RequestId,
    /// Lifecycle status. Not every API version reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    /// Connection that was billed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<ConnectionId>,
    /// Product whose pricing applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Upstream provider (e.g. `"openai"`).
    pub provider: String,
    /// Whose provider key was used.
    pub provider_key_type: ProviderKeyType,
    /// Model name, when the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Upstream endpoint that was called.
    pub endpoint: String,
    /// Provider's own response identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
    /// Raw usage and its cost.
    pub model_usage: ModelUsage,
    /// Merchant fee.
    pub fee: Fee,
    /// Lava service charge.
    pub service_charge: ServiceCharge,
    /// Usage cost plus fee plus service charge.
    pub total_request_cost: Amount,
    /// Portion charged to the wallet.
    pub total_wallet_cost: Amount,
    /// Portion charged to the merchant.
    pub total_merchant_cost: Amount,
    /// Merchant metadata attached to the request.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// Provider-side timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// When Lava recorded the request.
    pub created_at: DateTime<Utc>,
}

/// Usage breakdown of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelUsage {
    /// Prompt tokens.
    pub input_tokens: u64,
    /// Completion tokens.
    pub output_tokens: u64,
    /// All tokens.
    pub total_tokens: u64,
    /// Input characters (speech and text-to-speech models).
    pub input_characters: u64,
    /// Output characters.
    pub output_characters: u64,
    /// All characters.
    pub total_characters: u64,
    /// Input audio seconds.
    pub input_seconds: f64,
    /// Output audio seconds.
    pub output_seconds: f64,
    /// All audio seconds.
    pub total_seconds: f64,
    /// Cost of the input side.
    pub input_cost: Amount,
    /// Cost of the output side.
    pub output_cost: Amount,
    /// Total usage cost.
    pub total_cost: Amount,
    /// Who pays the usage cost.
    pub payer: Payer,
}

/// Merchant fee applied to a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    /// Total fee.
    pub amount: Amount,
    /// Fixed or percentage pricing.
    pub rate_type: RateType,
    /// Which tokens were counted.
    pub token_basis: TokenBasis,
    /// Per-tier contributions, in tier order.
    #[serde(default)]
    pub breakdown: Vec<FeeBreakdown>,
}

/// One tier's contribution to a [`Fee`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// The tier that applied.
    pub tier: FeeTier,
    /// Tokens billed in this tier.
    pub tokens: u64,
    /// Characters billed in this tier.
    pub characters: u64,
    /// Seconds billed in this tier.
    pub seconds: f64,
    /// Cost of this tier.
    pub cost: Amount,
}

/// A pricing band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTier {
    /// Usage level at which the band starts.
    pub start: u64,
    /// Price per unit in this band.
    pub rate: Amount,
    /// Unit the rate is expressed in.
    #[serde(rename = "type")]
    pub tier_type: TierType,
}

/// Lava's service charge on a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCharge {
    /// Charge amount.
    pub amount: Amount,
    /// Who pays it.
    pub payer: Payer,
}

/// Query parameters of `GET requests`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestsListParams {
    /// Cursor from a previous page.
    pub cursor: Option<String>,
    /// Maximum number of items per page.
    pub limit: Option<u32>,
    /// Only requests billed to this connection.
    pub connection_id: Option<ConnectionId>,
    /// Only requests priced by this product.
    pub product_id: Option<ProductId>,
    /// Only requests whose metadata matches every pair.
    pub metadata_filters: Option<MetadataFilters>,
}

/// Body of `POST requests`, for reporting usage that did not go through
/// the forward endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateRequestParams {
    /// Secret of the connection to bill.
    pub connection_secret: String,
    /// Secret of the product whose pricing applies.
    pub product_secret: String,
    /// Upstream provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Model name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Prompt tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    /// Completion tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    /// Input characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_characters: Option<u64>,
    /// Output characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_characters: Option<u64>,
    /// Input audio seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_seconds: Option<f64>,
    /// Output audio seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_seconds: Option<f64>,
    /// Merchant metadata to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

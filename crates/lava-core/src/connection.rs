//! Connection types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ConnectionId;
use crate::money::Amount;

/// A link between an end user's Lava wallet and the merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Connection identifier.
    pub connection_id: ConnectionId,
    /// Secret used when minting forward tokens for this connection.
    pub connection_secret: String,
    /// Merchant-supplied reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Snapshot of the connected wallet.
    pub wallet: Wallet,
    /// Start of the next usage period.
    pub next_usage_reset: DateTime<Utc>,
    /// Start of the current usage period.
    pub previous_usage_reset: DateTime<Utc>,
    /// When the connection was created.
    pub created_at: DateTime<Utc>,
}

/// Wallet snapshot embedded in a [`Connection`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Available balance.
    pub balance: Amount,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Holder first name.
    pub first_name: String,
    /// Holder last name.
    pub last_name: String,
    /// Whether the wallet refills itself automatically.
    pub autopay_enabled: bool,
}

/// Response of `DELETE connections/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConnectionResponse {
    /// Whether the connection was deleted.
    pub success: bool,
}

/// Query parameters of `GET connections`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionsListParams {
    /// Cursor from a previous page.
    pub cursor: Option<String>,
    /// Maximum number of items per page.
    pub limit: Option<u32>,
    /// Only connections with this merchant reference.
    pub reference_id: Option<String>,
}

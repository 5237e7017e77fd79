//! Checkout session types.
//!
//! A checkout session is a short-lived hosted flow. In `onboarding` mode it
//! creates a new connection; in `topup` mode it adds funds to the wallet
//! behind an existing one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::ids::{CheckoutSessionId, ConnectionId};

/// What a checkout session is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutMode {
    /// Link a new wallet and create a connection.
    Onboarding,
    /// Add balance to the wallet of an existing connection.
    Topup,
}

impl CheckoutMode {
    /// Get the mode name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::Topup => "topup",
        }
    }
}

impl fmt::Display for CheckoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckoutMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "onboarding" => Ok(Self::Onboarding),
            "topup" => Ok(Self::Topup),
            other => Err(ModelError::UnknownCheckoutMode(other.to_string())),
        }
    }
}

/// A checkout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Session identifier.
    pub checkout_session_id: CheckoutSessionId,
    /// Token handed to the hosted checkout front end.
    pub checkout_session_token: String,
    /// Onboarding or top-up.
    pub checkout_mode: CheckoutMode,
    /// Origin the checkout was started from.
    pub origin_url: String,
    /// Connection created or topped up by this session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<ConnectionId>,
    /// Merchant-supplied reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session was completed, if it has been.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Body of `POST checkout_sessions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCheckoutSessionParams {
    /// Onboarding or top-up.
    pub checkout_mode: CheckoutMode,
    /// Origin the hosted checkout will post back to.
    pub origin_url: String,
    /// Merchant-supplied reference to attach to the resulting connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Connection to top up (required by the API in `topup` mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<ConnectionId>,
}

impl CreateCheckoutSessionParams {
    /// Parameters for an onboarding session.
    #[must_use]
    pub fn onboarding(origin_url: impl Into<String>) -> Self {
        Self {
            checkout_mode: CheckoutMode::Onboarding,
            origin_url: origin_url.into(),
            reference_id: None,
            connection_id: None,
        }
    }

    /// Parameters for topping up an existing connection.
    #[must_use]
    pub fn topup(origin_url: impl Into<String>, connection_id: impl Into<ConnectionId>) -> Self {
        Self {
            checkout_mode: CheckoutMode::Topup,
            origin_url: origin_url.into(),
            reference_id: None,
            connection_id: Some(connection_id.into()),
        }
    }

    /// Attach a merchant reference.
    #[must_use]
    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }
}

/// Query parameters of `GET checkout_sessions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutSessionsListParams {
    /// Cursor from a previous page.
    pub cursor: Option<String>,
    /// Maximum number of items per page.
    pub limit: Option<u32>,
    /// Only sessions with this merchant reference.
    pub reference_id: Option<String>,
}

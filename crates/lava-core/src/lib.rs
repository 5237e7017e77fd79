//! Core types for the Lava payments API.
//!
//! This crate provides the wire model shared by the Lava client SDK:
//!
//! - **Identifiers**: `CheckoutSessionId`, `ConnectionId`, `RequestId`, `ProductId`
//! - **Money**: `Amount`
//! - **Checkout sessions**: `CheckoutSession`, `CheckoutMode`
//! - **Connections**: `Connection`, `Wallet`
//! - **Requests**: `Request`, `ModelUsage`, `Fee`, `ServiceCharge`
//! - **Usage**: `Usage`, `UsageItem`, `UsageTotals`
//! - **Pagination**: `ListResponse`
//!
//! # Monetary values
//!
//! The API reports every amount as a decimal string (`"0.001234"`). `Amount`
//! keeps that string verbatim so no precision is lost in a float round trip.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod checkout;
pub mod connection;
pub mod error;
pub mod ids;
pub mod list;
pub mod money;
pub mod request;
pub mod usage;
pub mod version;

pub use checkout::{
    CheckoutMode, CheckoutSession, CheckoutSessionsListParams, CreateCheckoutSessionParams,
};
pub use connection::{Connection, ConnectionsListParams, DeleteConnectionResponse, Wallet};
pub use error::ModelError;
pub use ids::{CheckoutSessionId, ConnectionId, ProductId, RequestId};
pub use list::ListResponse;
pub use money::Amount;
pub use request::{
    CreateRequestParams, Fee, FeeBreakdown, FeeTier, MetadataFilters, ModelUsage, Payer,
    ProviderKeyType, RateType, Request, RequestStatus, RequestsListParams, ServiceCharge,
    TierType, TokenBasis,
};
pub use usage::{Usage, UsageItem, UsageParams, UsageTotals};
pub use version::ApiVersion;

//! Lava Client SDK.
//!
//! This crate provides a typed client for the Lava payments API: checkout
//! sessions, connections, metered requests and usage, plus the forwarding
//! URLs and tokens used to route AI-provider calls through Lava.
//!
//! # Example
//!
//! ```no_run
//! use lava_client::{ClientOptions, ConnectionsListParams, ForwardTokenOptions, LavaClient};
//!
//! # async fn example() -> Result<(), lava_client::ClientError> {
//! let lava = LavaClient::new("aks_test_your_secret_key", ClientOptions::default())?;
//!
//! // List connections
//! let page = lava
//!     .connections()
//!     .list(&ConnectionsListParams::default())
//!     .await?;
//! for connection in &page.data {
//!     println!("{}: {}", connection.connection_id, connection.wallet.balance);
//! }
//!
//! // Route OpenAI calls through Lava
//! let base_url = lava.openai_url();
//! let api_key = lava.generate_forward_token(&ForwardTokenOptions::connection(
//!     "connection-secret",
//!     "product-secret",
//! ))?;
//! println!("OpenAI base URL: {base_url}, key: {api_key}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod forward;
mod query;
pub mod resources;

pub use client::{LavaClient, RequestOptions, API_VERSION_HEADER};
pub use config::{
    ClientOptions, Environment, DEFAULT_TIMEOUT_SECONDS, PRODUCTION_BASE_URL, SANDBOX_BASE_URL,
    TEST_KEY_PREFIX,
};
pub use error::ClientError;
pub use forward::{encode_forward_token, forward_url, ForwardTokenOptions, Provider};
pub use query::QueryParams;

pub use lava_core::*;

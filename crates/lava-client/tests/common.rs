//! Common test utilities for Lava client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use lava_client::{ClientOptions, LavaClient};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Secret key used by every harness client.
pub const TEST_SECRET_KEY: &str = "aks_test_integration";

/// Test harness with a mock Lava API and a client pointed at it.
pub struct TestHarness {
    /// The mock server standing in for the Lava API.
    pub server: MockServer,
    /// Client whose base URL is the mock server's `/v1/`.
    pub client: LavaClient,
}

impl TestHarness {
    /// Start a mock server and build a client for it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let options = ClientOptions::new().with_base_url(format!("{}/v1/", server.uri()));
        let client =
            LavaClient::new(TEST_SECRET_KEY, options).expect("Failed to build Lava client");

        Self { server, client }
    }

    /// Query string of the only request the server received.
    pub async fn single_request_query(&self) -> Option<String> {
        let requests = self
            .server
            .received_requests()
            .await
            .expect("request recording is enabled");
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].url.query().map(str::to_string)
    }
}

/// A connection as the API returns it.
pub fn connection_json(id: &str) -> Value {
    json!({
        "connection_id": id,
        "connection_secret": format!("{id}_secret"),
        "reference_id": "user-42",
        "wallet": {
            "balance": "12.345678",
            "phone": "+15555550100",
            "email": "wallet@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "autopay_enabled": false
        },
        "next_usage_reset": "2025-05-01T00:00:00Z",
        "previous_usage_reset": "2025-04-01T00:00:00Z",
        "created_at": "2025-03-15T12:30:00Z"
    })
}

/// A checkout session as the API returns it.
pub fn checkout_session_json(id: &str, mode: &str) -> Value {
    json!({
        "checkout_session_id": id,
        "checkout_session_token": format!("{id}_token"),
        "checkout_mode": mode,
        "origin_url": "https://shop.example.com",
        "created_at": "2025-04-21T10:00:00Z"
    })
}

/// A completed request as the API returns it.
pub fn request_json(id: &str) -> Value {
    json!({
        "request_id": id,
        "status": "completed",
        "connection_id": "conn_1",
        "product_id": "prod_1",
        "provider": "anthropic",
        "provider_key_type": "unmanaged",
        "model": "claude-3-5-haiku",
        "endpoint": "/v1/messages",
        "response_id": "msg_123",
        "model_usage": {
            "input_tokens": 1000,
            "output_tokens": 200,
            "total_tokens": 1200,
            "input_characters": 0,
            "output_characters": 0,
            "total_characters": 0,
            "input_seconds": 0,
            "output_seconds": 0,
            "total_seconds": 0,
            "input_cost": "0.000800",
            "output_cost": "0.000800",
            "total_cost": "0.001600",
            "payer": "merchant"
        },
        "fee": {
            "amount": "0.000240",
            "rate_type": "percentage",
            "token_basis": "output",
            "breakdown": []
        },
        "service_charge": { "amount": "0.000010", "payer": "wallet" },
        "total_request_cost": "0.001850",
        "total_wallet_cost": "0.000250",
        "total_merchant_cost": "0.001600",
        "metadata": { "feature": "summarize" },
        "timestamp": "2025-04-21T09:59:59Z",
        "created_at": "2025-04-21T10:00:00Z"
    })
}

/// Usage totals with every amount set to `amount`.
pub fn usage_totals_json(requests: u64, amount: &str) -> Value {
    json!({
        "total_requests": requests,
        "total_usage_tokens": requests * 100,
        "total_usage_cost": amount,
        "total_fee_amount": amount,
        "total_service_charge_amount": amount,
        "total_request_cost": amount,
        "total_wallet_cost": amount,
        "total_merchant_cost": amount
    })
}

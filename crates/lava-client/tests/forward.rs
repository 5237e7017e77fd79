//! Environment selection, forwarding URLs and forward tokens.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use lava_client::{
    ClientError, ClientOptions, Environment, ForwardTokenOptions, LavaClient, Provider,
    PRODUCTION_BASE_URL, SANDBOX_BASE_URL,
};
use serde_json::{json, Value};

fn decode_token(token: &str) -> Value {
    let bytes = BASE64.decode(token).expect("token is base64");
    serde_json::from_slice(&bytes).expect("token is JSON")
}

// ============================================================================
// Base URL Selection
// ============================================================================

#[test]
fn sandbox_key_without_override_uses_sandbox() {
    let client = LavaClient::new("aks_test_abc", ClientOptions::default()).unwrap();
    assert_eq!(client.base_url(), SANDBOX_BASE_URL);
    assert_eq!(client.environment(), Environment::Sandbox);
}

#[test]
fn live_key_without_override_uses_production() {
    let client = LavaClient::new("aks_live_abc", ClientOptions::default()).unwrap();
    assert_eq!(client.base_url(), PRODUCTION_BASE_URL);
}

#[test]
fn override_wins_regardless_of_prefix() {
    for key in ["aks_test_abc", "aks_live_abc"] {
        let options = ClientOptions::new().with_base_url("https://lava.internal/v1/");
        let client = LavaClient::new(key, options).unwrap();
        assert_eq!(client.base_url(), "https://lava.internal/v1/");
    }
}

// ============================================================================
// Forwarding URLs
// ============================================================================

#[test]
fn every_provider_gets_an_encoded_forward_url() {
    let client = LavaClient::new("aks_test_abc", ClientOptions::default()).unwrap();

    for provider in Provider::ALL {
        let expected = format!(
            "{SANDBOX_BASE_URL}forward?u={}",
            urlencoding::encode(provider.upstream_base_url())
        );
        assert_eq!(client.forward_url(provider), expected, "{provider}");
    }
}

#[test]
fn named_forward_url_accessors() {
    let client = LavaClient::new("aks_live_abc", ClientOptions::default()).unwrap();
    let prefix = "https://api.lavapayments.com/v1/forward?u=";

    assert_eq!(
        client.openai_url(),
        format!("{prefix}https%3A%2F%2Fapi.openai.com%2Fv1")
    );
    assert_eq!(
        client.mistral_url(),
        format!("{prefix}https%3A%2F%2Fapi.mistral.ai%2Fv1")
    );
    assert_eq!(
        client.deepseek_url(),
        format!("{prefix}https%3A%2F%2Fapi.deepseek.com%2Fv1")
    );
    assert_eq!(client.xai_url(), format!("{prefix}https%3A%2F%2Fapi.x.ai%2Fv1"));
    assert_eq!(
        client.google_url(),
        format!("{prefix}https%3A%2F%2Fgenerativelanguage.googleapis.com%2Fv1beta")
    );
    assert_eq!(
        client.google_openai_compatible_url(),
        format!("{prefix}https%3A%2F%2Fgenerativelanguage.googleapis.com%2Fv1beta%2Fopenai")
    );
}

#[test]
fn forward_urls_follow_override() {
    let options = ClientOptions::new().with_base_url("http://localhost:4000/v1");
    let client = LavaClient::new("aks_test_abc", options).unwrap();
    assert!(client
        .anthropic_url()
        .starts_with("http://localhost:4000/v1/forward?u="));
}

// ============================================================================
// Forward Tokens
// ============================================================================

#[test]
fn token_with_secret_pair() {
    let client = LavaClient::new("aks_test_abc", ClientOptions::default()).unwrap();
    let token = client
        .generate_forward_token(&ForwardTokenOptions::connection("cs", "ps"))
        .unwrap();

    let decoded = decode_token(&token);
    assert_eq!(decoded["secret_key"], "aks_test_abc");
    assert_eq!(decoded["connection_secret"], "cs");
    assert_eq!(decoded["product_secret"], "ps");
    assert!(decoded.get("provider_key").is_none());
}

#[test]
fn token_with_provider_key_only() {
    let client = LavaClient::new("aks_test_abc", ClientOptions::default()).unwrap();
    let options = ForwardTokenOptions::from_parts(None, None, Some("pk".into())).unwrap();
    let token = client.generate_forward_token(&options).unwrap();

    assert_eq!(
        decode_token(&token),
        json!({
            "secret_key": "aks_test_abc",
            "connection_secret": null,
            "product_secret": null,
            "provider_key": "pk"
        })
    );
}

#[test]
fn token_is_deterministic() {
    let client = LavaClient::new("aks_live_abc", ClientOptions::default()).unwrap();
    let options = ForwardTokenOptions::connection("cs", "ps").with_provider_key("pk");
    assert_eq!(
        client.generate_forward_token(&options).unwrap(),
        client.generate_forward_token(&options).unwrap()
    );
}

#[test]
fn neither_secret_pair_nor_provider_key_is_rejected() {
    let err = ForwardTokenOptions::from_parts(None, None, None).unwrap_err();
    assert!(matches!(err, ClientError::InvalidForwardTokenOptions(_)));
}

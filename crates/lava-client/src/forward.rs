//! Provider forwarding.
//!
//! Lava meters AI-provider calls by proxying them through its `forward`
//! endpoint. A caller points its provider SDK at a forwarding URL (one per
//! provider) and authenticates with a forward token instead of a provider
//! key.

use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Upstream AI providers reachable through the forward endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// `OpenAI`.
    OpenAi,
    /// Anthropic.
    Anthropic,
    /// Mistral.
    Mistral,
    /// `DeepSeek`.
    DeepSeek,
    /// xAI.
    Xai,
    /// Google Gemini (native API).
    Google,
    /// Google Gemini through its `OpenAI`-compatible API.
    GoogleOpenAiCompatible,
}

impl Provider {
    /// Every supported provider.
    pub const ALL: [Self; 7] = [
        Self::OpenAi,
        Self::Anthropic,
        Self::Mistral,
        Self::DeepSeek,
        Self::Xai,
        Self::Google,
        Self::GoogleOpenAiCompatible,
    ];

    /// The provider's own API base URL.
    #[must_use]
    pub const fn upstream_base_url(&self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Anthropic => "https://api.anthropic.com/v1",
            Self::Mistral => "https://api.mistral.ai/v1",
            Self::DeepSeek => "https://api.deepseek.com/v1",
            Self::Xai => "https://api.x.ai/v1",
            Self::Google => "https://generativelanguage.googleapis.com/v1beta",
            Self::GoogleOpenAiCompatible => {
                "https://generativelanguage.googleapis.com/v1beta/openai"
            }
        }
    }

    /// Get the provider name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Mistral => "mistral",
            Self::DeepSeek => "deepseek",
            Self::Xai => "xai",
            Self::Google => "google",
            Self::GoogleOpenAiCompatible => "google_openai_compatible",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build `{base}forward?u=<upstream>` with the upstream URL percent-encoded.
///
/// `base` must already end in `/`.
#[must_use]
pub fn forward_url(base: &str, provider: Provider) -> String {
    format!(
        "{base}forward?u={}",
        urlencoding::encode(provider.upstream_base_url())
    )
}

/// Credentials a forward token carries besides the merchant secret key.
///
/// Exactly one of two forms is valid: a connection/product secret pair
/// (optionally with the merchant's own provider key), or a provider key on
/// its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawForwardTokenOptions")]
pub enum ForwardTokenOptions {
    /// Bill a connection's wallet using a product's pricing.
    Connection {
        /// Secret of the connection to bill.
        connection_secret: String,
        /// Secret of the product whose pricing applies.
        product_secret: String,
        /// Merchant's provider key, for unmanaged-key billing.
        provider_key: Option<String>,
    },
    /// Forward with the merchant's provider key and no wallet billing.
    ProviderKey {
        /// Merchant's provider key.
        provider_key: String,
    },
}

impl ForwardTokenOptions {
    /// Secret pair without a provider key.
    #[must_use]
    pub fn connection(
        connection_secret: impl Into<String>,
        product_secret: impl Into<String>,
    ) -> Self {
        Self::Connection {
            connection_secret: connection_secret.into(),
            product_secret: product_secret.into(),
            provider_key: None,
        }
    }

    /// Provider key on its own.
    #[must_use]
    pub fn provider_key(provider_key: impl Into<String>) -> Self {
        Self::ProviderKey {
            provider_key: provider_key.into(),
        }
    }

    /// Add the merchant's provider key to a secret pair.
    ///
    /// On the provider-key form this replaces the key.
    #[must_use]
    pub fn with_provider_key(self, key: impl Into<String>) -> Self {
        match self {
            Self::Connection {
                connection_secret,
                product_secret,
                ..
            } => Self::Connection {
                connection_secret,
                product_secret,
                provider_key: Some(key.into()),
            },
            Self::ProviderKey { .. } => Self::provider_key(key),
        }
    }

    /// Validate the loose three-field shape.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidForwardTokenOptions`] when only one of
    /// the two secrets is present, or when neither a secret pair nor a
    /// provider key is given.
    pub fn from_parts(
        connection_secret: Option<String>,
        product_secret: Option<String>,
        provider_key: Option<String>,
    ) -> Result<Self, ClientError> {
        match (connection_secret, product_secret, provider_key) {
            (Some(connection_secret), Some(product_secret), provider_key) => Ok(Self::Connection {
                connection_secret,
                product_secret,
                provider_key,
            }),
            (None, None, Some(provider_key)) => Ok(Self::ProviderKey { provider_key }),
            (None, None, None) => Err(ClientError::InvalidForwardTokenOptions(
                "either connection_secret and product_secret, or provider_key, is required".into(),
            )),
            _ => Err(ClientError::InvalidForwardTokenOptions(
                "connection_secret and product_secret must be given together".into(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawForwardTokenOptions {
    #[serde(default)]
    connection_secret: Option<String>,
    #[serde(default)]
    product_secret: Option<String>,
    #[serde(default)]
    provider_key: Option<String>,
}

impl TryFrom<RawForwardTokenOptions> for ForwardTokenOptions {
    type Error = ClientError;

    fn try_from(raw: RawForwardTokenOptions) -> Result<Self, Self::Error> {
        Self::from_parts(raw.connection_secret, raw.product_secret, raw.provider_key)
    }
}

/// JSON payload of a forward token.
///
/// The two secrets serialize as `null` in the provider-key form, while an
/// absent provider key is left out entirely.
#[derive(Debug, Serialize)]
struct ForwardTokenPayload<'a> {
    secret_key: &'a str,
    connection_secret: Option<&'a str>,
    product_secret: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_key: Option<&'a str>,
}

/// Encode a forward token: standard base64 of the compact JSON payload.
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized.
pub fn encode_forward_token(
    secret_key: &str,
    options: &ForwardTokenOptions,
) -> Result<String, ClientError> {
    let payload = match options {
        ForwardTokenOptions::Connection {
            connection_secret,
            product_secret,
            provider_key,
        } => ForwardTokenPayload {
            secret_key,
            connection_secret: Some(connection_secret.as_str()),
            product_secret: Some(product_secret.as_str()),
            provider_key: provider_key.as_deref(),
        },
        ForwardTokenOptions::ProviderKey { provider_key } => ForwardTokenPayload {
            secret_key,
            connection_secret: None,
            product_secret: None,
            provider_key: Some(provider_key.as_str()),
        },
    };

    let json = serde_json::to_vec(&payload)?;
    Ok(BASE64.encode(json))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(token: &str) -> serde_json::Value {
        let bytes = BASE64.decode(token).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn forward_url_encodes_upstream() {
        let url = forward_url("https://api.lavapayments.com/v1/", Provider::OpenAi);
        assert_eq!(
            url,
            "https://api.lavapayments.com/v1/forward?u=https%3A%2F%2Fapi.openai.com%2Fv1"
        );
    }

    #[test]
    fn provider_index_matches_all_order() {
        for (i, provider) in Provider::ALL.iter().enumerate() {
            assert_eq!(provider.index(), i);
        }
    }

    #[test]
    fn token_for_secret_pair_omits_provider_key() {
        let token =
            encode_forward_token("aks_test_key", &ForwardTokenOptions::connection("cs", "ps"))
                .unwrap();
        let decoded = decode(&token);

        assert_eq!(
            decoded,
            serde_json::json!({
                "secret_key": "aks_test_key",
                "connection_secret": "cs",
                "product_secret": "ps"
            })
        );
        assert!(decoded.get("provider_key").is_none());
    }

    #[test]
    fn token_for_provider_key_has_null_secrets() {
        let token =
            encode_forward_token("aks_live_key", &ForwardTokenOptions::provider_key("pk")).unwrap();

        assert_eq!(
            decode(&token),
            serde_json::json!({
                "secret_key": "aks_live_key",
                "connection_secret": null,
                "product_secret": null,
                "provider_key": "pk"
            })
        );
    }

    #[test]
    fn token_payload_is_compact_and_ordered() {
        let options = ForwardTokenOptions::connection("cs", "ps").with_provider_key("pk");
        let token = encode_forward_token("sk", &options).unwrap();
        let raw = String::from_utf8(BASE64.decode(token).unwrap()).unwrap();
        assert_eq!(
            raw,
            r#"{"secret_key":"sk","connection_secret":"cs","product_secret":"ps","provider_key":"pk"}"#
        );
    }

    #[test]
    fn from_parts_accepts_both_forms() {
        let pair = ForwardTokenOptions::from_parts(Some("cs".into()), Some("ps".into()), None);
        assert_eq!(pair.unwrap(), ForwardTokenOptions::connection("cs", "ps"));

        let key = ForwardTokenOptions::from_parts(None, None, Some("pk".into()));
        assert_eq!(key.unwrap(), ForwardTokenOptions::provider_key("pk"));
    }

    #[test]
    fn from_parts_rejects_empty_and_half_pairs() {
        assert!(matches!(
            ForwardTokenOptions::from_parts(None, None, None),
            Err(ClientError::InvalidForwardTokenOptions(_))
        ));
        assert!(matches!(
            ForwardTokenOptions::from_parts(Some("cs".into()), None, Some("pk".into())),
            Err(ClientError::InvalidForwardTokenOptions(_))
        ));
    }

    #[test]
    fn deserialize_validates_shape() {
        let options: ForwardTokenOptions = serde_json::from_str(
            r#"{"connection_secret": null, "product_secret": null, "provider_key": "pk"}"#,
        )
        .unwrap();
        assert_eq!(options, ForwardTokenOptions::provider_key("pk"));

        let err = serde_json::from_str::<ForwardTokenOptions>("{}").unwrap_err();
        assert!(err.to_string().contains("invalid forward token options"));
    }
}

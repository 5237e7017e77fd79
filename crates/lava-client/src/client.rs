//! Lava HTTP client implementation.

use std::fmt;
use std::time::Duration;

use lava_core::ApiVersion;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::{ClientOptions, Environment};
use crate::error::ClientError;
use crate::forward::{encode_forward_token, forward_url, ForwardTokenOptions, Provider};
use crate::query::QueryParams;
use crate::resources::{CheckoutSessions, Connections, Requests, UsageResource};

/// Header carrying the API version tag.
pub const API_VERSION_HEADER: &str = "X-Lava-API-Version";

const UNKNOWN_ERROR: &str = "Unknown error";

/// Lava API client.
///
/// Configuration is fixed at construction. Cloning is cheap and clones share
/// the underlying connection pool.
#[derive(Clone)]
pub struct LavaClient {
    client: Client,
    secret_key: String,
    base_url: Url,
    api_version: ApiVersion,
    environment: Environment,
    forward_urls: Vec<String>,
}

impl fmt::Debug for LavaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LavaClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

impl LavaClient {
    /// Create a new Lava client.
    ///
    /// # Arguments
    ///
    /// * `secret_key` - Lava secret key (`aks_test_...` selects the sandbox)
    /// * `options` - API version, optional base URL override, timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is empty, the base URL override is
    /// not a valid URL, or the HTTP client cannot be built.
    pub fn new(secret_key: impl Into<String>, options: ClientOptions) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        Self::with_http_client(secret_key, options, client)
    }

    /// Create a client around a preconfigured `reqwest::Client`.
    ///
    /// `options.timeout_seconds` is ignored; the given client's own settings
    /// apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is empty or the base URL override
    /// is not a valid URL.
    pub fn with_http_client(
        secret_key: impl Into<String>,
        options: ClientOptions,
        client: Client,
    ) -> Result<Self, ClientError> {
        let secret_key = secret_key.into();
        if secret_key.trim().is_empty() {
            return Err(ClientError::Configuration("secret key is required".into()));
        }

        let environment = Environment::from_secret_key(&secret_key);
        let base_url = options.resolve_base_url(&secret_key)?;
        let forward_urls = Provider::ALL
            .iter()
            .map(|provider| forward_url(base_url.as_str(), *provider))
            .collect();

        debug!(
            base_url = %base_url,
            %environment,
            api_version = %options.api_version,
            "configured Lava client"
        );

        Ok(Self {
            client,
            secret_key,
            base_url,
            api_version: options.api_version,
            environment,
            forward_urls,
        })
    }

    /// Create a client from environment variables.
    ///
    /// Reads the secret key from `LAVA_SECRET_KEY` and the remaining options
    /// via [`ClientOptions::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if `LAVA_SECRET_KEY` is unset or any option is invalid.
    pub fn from_env() -> Result<Self, ClientError> {
        let secret_key = std::env::var("LAVA_SECRET_KEY")
            .map_err(|_| ClientError::Configuration("LAVA_SECRET_KEY is not set".into()))?;
        Self::new(secret_key, ClientOptions::from_env()?)
    }

    /// Resolved API base URL, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// API version sent with every request.
    #[must_use]
    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Environment implied by the secret key's prefix.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Checkout session endpoints.
    #[must_use]
    pub fn checkout_sessions(&self) -> CheckoutSessions<'_> {
        CheckoutSessions::new(self)
    }

    /// Connection endpoints.
    #[must_use]
    pub fn connections(&self) -> Connections<'_> {
        Connections::new(self)
    }

    /// Request endpoints.
    #[must_use]
    pub fn requests(&self) -> Requests<'_> {
        Requests::new(self)
    }

    /// Usage endpoint.
    #[must_use]
    pub fn usage(&self) -> UsageResource<'_> {
        UsageResource::new(self)
    }

    /// Forwarding URL for a provider: use it as that provider's base URL.
    #[must_use]
    pub fn forward_url(&self, provider: Provider) -> &str {
        &self.forward_urls[provider.index()]
    }

    /// Every provider with its forwarding URL.
    pub fn forward_urls(&self) -> impl Iterator<Item = (Provider, &str)> {
        Provider::ALL
            .into_iter()
            .zip(self.forward_urls.iter().map(String::as_str))
    }

    /// `OpenAI` forwarding URL.
    #[must_use]
    pub fn openai_url(&self) -> &str {
        self.forward_url(Provider::OpenAi)
    }

    /// Anthropic forwarding URL.
    #[must_use]
    pub fn anthropic_url(&self) -> &str {
        self.forward_url(Provider::Anthropic)
    }

    /// Mistral forwarding URL.
    #[must_use]
    pub fn mistral_url(&self) -> &str {
        self.forward_url(Provider::Mistral)
    }

    /// `DeepSeek` forwarding URL.
    #[must_use]
    pub fn deepseek_url(&self) -> &str {
        self.forward_url(Provider::DeepSeek)
    }

    /// xAI forwarding URL.
    #[must_use]
    pub fn xai_url(&self) -> &str {
        self.forward_url(Provider::Xai)
    }

    /// Google Gemini forwarding URL.
    #[must_use]
    pub fn google_url(&self) -> &str {
        self.forward_url(Provider::Google)
    }

    /// Google Gemini `OpenAI`-compatible forwarding URL.
    #[must_use]
    pub fn google_openai_compatible_url(&self) -> &str {
        self.forward_url(Provider::GoogleOpenAiCompatible)
    }

    /// Generate a token for the forward endpoint.
    ///
    /// The result is base64-encoded JSON carrying this client's secret key
    /// plus the given options. Send it as the provider SDK's API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the token payload cannot be serialized.
    pub fn generate_forward_token(
        &self,
        options: &ForwardTokenOptions,
    ) -> Result<String, ClientError> {
        encode_forward_token(&self.secret_key, options)
    }

    /// Make a request to the Lava API.
    ///
    /// `path` is resolved against the base URL. Every call carries bearer
    /// auth, a JSON content type and the API version header.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] for non-success statuses,
    /// [`ClientError::Http`] for transport failures and
    /// [`ClientError::Serialization`] if a success body is not the expected JSON.
    #[instrument(skip_all, fields(method = %method, path = path))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ClientError::Configuration(format!("invalid path {path:?}: {err}")))?;

        if !options.query.is_empty() {
            url.query_pairs_mut().extend_pairs(options.query.pairs());
        }

        debug!(url = %url, has_body = options.body.is_some(), "sending Lava API request");

        let mut builder = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.secret_key))
            .header(CONTENT_TYPE, "application/json")
            .header(API_VERSION_HEADER, self.api_version.as_str());

        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        // Unparseable error bodies count as `{}`.
        let error_body: Value = serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        let message = error_message(&error_body);

        warn!(status = status.as_u16(), %message, "Lava API request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .map_or_else(|| status.as_str().to_string(), str::to_string),
            message,
        })
    }
}

/// Pull a message out of an error body's `error` field.
///
/// Objects, arrays and `null` are stringified as JSON. Any other falsy
/// value (missing, `""`, `0`, `false`) falls back to a generic message.
fn error_message(body: &Value) -> String {
    match body.get("error") {
        Some(error @ (Value::Object(_) | Value::Array(_) | Value::Null)) => error.to_string(),
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => UNKNOWN_ERROR.to_string(),
    }
}

/// Query string and JSON body for [`LavaClient::request`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    query: QueryParams,
    body: Option<Value>,
}

impl RequestOptions {
    /// No query and no body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query parameters.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Set the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

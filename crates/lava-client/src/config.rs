//! Client configuration.

use std::fmt;

use lava_core::ApiVersion;
use reqwest::Url;

use crate::error::ClientError;

/// Production API base URL.
pub const PRODUCTION_BASE_URL: &str = "https://api.lavapayments.com/v1/";

/// Sandbox API base URL.
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.lavapayments.com/v1/";

/// Secret keys with this prefix belong to the sandbox.
pub const TEST_KEY_PREFIX: &str = "aks_test_";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Which Lava deployment a secret key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Live keys.
    Production,
    /// `aks_test_` keys.
    Sandbox,
}

impl Environment {
    /// Infer the environment from a secret key's prefix.
    #[must_use]
    pub fn from_secret_key(secret_key: &str) -> Self {
        if secret_key.starts_with(TEST_KEY_PREFIX) {
            Self::Sandbox
        } else {
            Self::Production
        }
    }

    /// Default API base URL for this environment.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
        }
    }

    /// Get the environment name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client options for customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// API version sent with every request.
    pub api_version: ApiVersion,
    /// Explicit base URL. When unset it is inferred from the secret key.
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::LATEST,
            base_url: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ClientOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API version.
    #[must_use]
    pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Load options from environment variables.
    ///
    /// - `LAVA_API_VERSION` (default: latest)
    /// - `LAVA_BASE_URL` (default: inferred from the secret key)
    /// - `LAVA_TIMEOUT_SECONDS` (default: 30)
    ///
    /// # Errors
    ///
    /// Returns an error if `LAVA_API_VERSION` is set to an unknown version.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ClientError> {
        let api_version = match lookup("LAVA_API_VERSION").filter(|v| !v.trim().is_empty()) {
            Some(tag) => tag.trim().parse()?,
            None => ApiVersion::LATEST,
        };

        Ok(Self {
            api_version,
            base_url: lookup("LAVA_BASE_URL").filter(|v| !v.trim().is_empty()),
            timeout_seconds: lookup("LAVA_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        })
    }

    /// Resolve the base URL for a secret key.
    ///
    /// An explicit override always wins and is normalized to end in `/` so
    /// relative paths keep the `/v1/` prefix.
    pub(crate) fn resolve_base_url(&self, secret_key: &str) -> Result<Url, ClientError> {
        let base = match &self.base_url {
            Some(explicit) => format!("{}/", explicit.trim_end_matches('/')),
            None => Environment::from_secret_key(secret_key).base_url().to_string(),
        };

        Url::parse(&base)
            .map_err(|err| ClientError::Configuration(format!("invalid base url {base:?}: {err}")))
    }
}

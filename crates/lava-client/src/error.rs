//! Client error types.

/// Errors that can occur when using the Lava client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure (DNS, connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success response.
    #[error("Lava API Error: {status} {status_text} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
        /// Message extracted from the response body's `error` field.
        message: String,
    },

    /// A body could not be serialized or a response was not the expected JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Forward-token options matched neither the secret-pair nor the
    /// provider-key form.
    #[error("invalid forward token options: {0}")]
    InvalidForwardTokenOptions(String),
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<lava_core::ModelError> for ClientError {
    fn from(err: lava_core::ModelError) -> Self {
        Self::Configuration(err.to_string())
    }
}

//! Decimal amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount as reported by the API.
///
/// Amounts travel as decimal strings (`"12.500000"`) and are kept that way.
/// Converting to `f64` would lose precision on fractional cents, so the only
/// accessor hands back the original text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    /// Wrap a decimal string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The decimal string exactly as received.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

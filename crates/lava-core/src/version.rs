//! API version tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Version of the Lava API a client speaks.
///
/// Sent on every call as the `X-Lava-API-Version` header. The response
/// types in this crate follow the shape of the newest variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiVersion {
    /// `2025-04-21.v1`
    #[default]
    #[serde(rename = "2025-04-21.v1")]
    V2025_04_21,
}

impl ApiVersion {
    /// The most recent version this crate models.
    pub const LATEST: Self = Self::V2025_04_21;

    /// Get the version tag as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V2025_04_21 => "2025-04-21.v1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2025-04-21.v1" => Ok(Self::V2025_04_21),
            other => Err(ModelError::UnknownApiVersion(other.to_string())),
        }
    }
}

//! Identifier types for Lava resources.
//!
//! Lava identifiers are opaque strings minted by the API. Each resource gets
//! its own newtype so a connection ID cannot be passed where a request ID is
//! expected.
//!
//! # Macro-based ID Types
//!
//! The `string_id_type!` macro generates the newtype and its conversions so
//! every identifier serializes, displays and compares the same way.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a string-backed identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `String` with implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `Serialize`, `Deserialize` (transparent string)
/// - `Display`, `Debug`
/// - `From<String>`, `From<&str>`, `Into<String>`
/// - `AsRef<str>`
macro_rules! string_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from its string form.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id_type!(CheckoutSessionId, "A checkout session identifier.");
string_id_type!(
    ConnectionId,
    "A connection identifier.\n\nConnections link an end user's Lava wallet to a merchant."
);
string_id_type!(
    RequestId,
    "A request identifier.\n\nEach metered call forwarded through Lava gets one."
);
string_id_type!(ProductId, "A merchant product identifier.");

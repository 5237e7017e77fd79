//! Error types for the Lava wire model.

/// Errors raised while parsing wire values from plain strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The API version tag is not one this crate knows about.
    #[error("unknown API version: {0}")]
    UnknownApiVersion(String),

    /// The checkout mode is neither `onboarding` nor `topup`.
    #[error("unknown checkout mode: {0}")]
    UnknownCheckoutMode(String),
}

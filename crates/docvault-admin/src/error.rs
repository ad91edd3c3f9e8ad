//! Admin descriptor errors.

use thiserror::Error;

/// Errors raised while resolving models for the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The resolver has no handle registered for this model.
    #[error("model not registered with the resolver: {0}")]
    UnknownModel(String),

    /// A string did not name any known model.
    #[error("unknown model name: {0}")]
    UnknownModelName(String),
}

/// Result alias for admin descriptor operations.
pub type Result<T> = std::result::Result<T, Error>;

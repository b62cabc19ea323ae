//! Error types

mod api;
mod validation;

pub use api::*;
pub use validation::*;

/// Top-level error for all postboard operations.
///
/// Classification into the `Api` family happens exactly once, at the HTTP
/// boundary inside the client; everything above it pattern-matches on this
/// enum instead of re-raising.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the HTTP layer or the remote API.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Form validation failed before any request was issued.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Fallback for panics and other unrecognized failures.
    #[error("{0}")]
    Unknown(String),
}

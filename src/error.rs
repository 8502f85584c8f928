//! Error types.

/// Errors returned by the fallible parts of the crate.
///
/// Widget operation itself never fails; only decoding data that arrives from
/// a remote player can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The payload was not valid JSON or did not match the expected shape.
    #[error("Failed to decode playback snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

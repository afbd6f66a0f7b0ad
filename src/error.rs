//! Error types for xcb-pack.
//!
//! Contract violations (oversized sequences, zero-width integer packing,
//! mis-sized integer buffers) panic instead of surfacing here.

use thiserror::Error;

/// Main error type for all xcb-pack operations.
#[derive(Debug, Error)]
pub enum XcbError {
    /// Canonical MessagePack writer failed.
    #[error("MsgPack encode error: {0}")]
    MsgPackEncode(#[from] rmpv::encode::Error),

    /// Serde value could not be serialized to MessagePack.
    #[error("MsgPack serialize error: {0}")]
    MsgPackSerialize(#[from] rmp_serde::encode::Error),

    /// Serialized bytes could not be read back as a MessagePack value.
    #[error("MsgPack read error: {0}")]
    MsgPackRead(#[from] rmpv::decode::Error),

    /// JSON configuration could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    Config(String),

    /// Integer buffer has the wrong width.
    #[error("Expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Byte width of the target integer.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

/// Result type alias using XcbError.
pub type Result<T> = std::result::Result<T, XcbError>;

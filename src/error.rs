//! Error types for peerwire.

use thiserror::Error;

/// Main error type for all peerwire operations.
#[derive(Debug, Error)]
pub enum PeerwireError {
    /// The `{"strings": [...]}` record could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Writing or finishing the gzip stream failed.
    #[error("compression error: {0}")]
    Compression(#[source] std::io::Error),

    /// Block too short to hold a tag byte and a payload.
    #[error("corrupted data: block of {len} byte(s) has no payload")]
    CorruptData {
        /// Length of the rejected block.
        len: usize,
    },

    /// Tag byte is not a known compression mode.
    #[error("unknown compression mode: {0}")]
    UnknownEncoding(u8),

    /// The gzip payload is malformed or truncated.
    #[error("decompression error: {0}")]
    Decompression(#[source] std::io::Error),

    /// The payload is not a valid string-list record.
    #[error("deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// A `host:port` string could not be parsed.
    #[error("invalid host/port {input:?}: {reason}")]
    InvalidHostPort {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Fieldless view of [`PeerwireError`] for matching on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Serialization,
    Compression,
    CorruptData,
    UnknownEncoding,
    Decompression,
    Deserialization,
    InvalidHostPort,
}

impl PeerwireError {
    /// Get the failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Compression(_) => ErrorKind::Compression,
            Self::CorruptData { .. } => ErrorKind::CorruptData,
            Self::UnknownEncoding(_) => ErrorKind::UnknownEncoding,
            Self::Decompression(_) => ErrorKind::Decompression,
            Self::Deserialization(_) => ErrorKind::Deserialization,
            Self::InvalidHostPort { .. } => ErrorKind::InvalidHostPort,
        }
    }

    pub(crate) fn host_port(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidHostPort {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using PeerwireError.
pub type Result<T> = std::result::Result<T, PeerwireError>;

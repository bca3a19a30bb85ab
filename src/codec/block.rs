//! Encoded block with typed accessors.
//!
//! Uses `bytes::Bytes` so a block can be handed to a transport without
//! copying.
//!
//! # Example
//!
//! ```
//! use peerwire::codec::{CompressionMode, ListCodec};
//!
//! let block = ListCodec::encode(&["a", "b"], 1024).unwrap();
//! assert_eq!(block.mode(), Some(CompressionMode::Raw));
//! assert_eq!(block.payload(), br#"{"strings":["a","b"]}"#);
//! ```

use bytes::Bytes;

use super::mode::CompressionMode;

/// A complete `[tag][payload]` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBlock {
    bytes: Bytes,
}

impl EncodedBlock {
    /// Wrap bytes produced by an encoder or received from a peer.
    ///
    /// No validation happens here; [`ListCodec::decode`](super::ListCodec::decode)
    /// does that.
    pub fn new(bytes: Bytes) -> Self {
        Self { bytes }
    }

    /// Create a block from raw bytes (copies data).
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            bytes: Bytes::copy_from_slice(bytes),
        }
    }

    /// Get the compression mode named by the tag byte.
    ///
    /// Returns `None` for an empty block or an unknown tag.
    #[inline]
    pub fn mode(&self) -> Option<CompressionMode> {
        self.bytes.first().copied().and_then(CompressionMode::from_tag)
    }

    /// Get the raw tag byte, if any.
    #[inline]
    pub fn tag(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    /// Get the payload following the tag byte.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        self.bytes.get(1..).unwrap_or_default()
    }

    /// Get the whole block, tag included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the block length, tag included.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the block is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the block and return its bytes.
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl AsRef<[u8]> for EncodedBlock {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Bytes> for EncodedBlock {
    fn from(bytes: Bytes) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for EncodedBlock {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(Bytes::from(bytes))
    }
}

impl From<EncodedBlock> for Bytes {
    fn from(block: EncodedBlock) -> Self {
        block.bytes
    }
}

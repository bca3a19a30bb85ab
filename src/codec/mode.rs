//! Compression mode tag.
//!
//! Every encoded block starts with a single tag byte:
//! ```text
//! ┌────────┬──────────────────────────────┐
//! │ Tag    │ Payload                      │
//! │ 1 byte │ N bytes                      │
//! │ 0 / 1  │ JSON record / gzip(JSON)     │
//! └────────┴──────────────────────────────┘
//! ```

use crate::error::PeerwireError;

/// Tag byte for uncompressed payloads.
pub const TAG_RAW: u8 = 0;

/// Tag byte for gzip-compressed payloads.
pub const TAG_GZIP: u8 = 1;

/// How the payload following the tag byte is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CompressionMode {
    /// Serialized record stored verbatim.
    Raw = TAG_RAW,
    /// Serialized record stored as a gzip stream.
    Gzip = TAG_GZIP,
}

impl CompressionMode {
    /// Pick the mode for a serialized payload of `len` bytes.
    ///
    /// Compression kicks in only when the payload is strictly larger
    /// than the threshold.
    #[inline]
    pub fn for_payload(len: usize, compress_threshold: usize) -> Self {
        if len > compress_threshold {
            Self::Gzip
        } else {
            Self::Raw
        }
    }

    /// Get the tag byte for this mode.
    #[inline]
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Decode a tag byte.
    ///
    /// Returns `None` for unknown tags.
    #[inline]
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            TAG_RAW => Some(Self::Raw),
            TAG_GZIP => Some(Self::Gzip),
            _ => None,
        }
    }
}

impl TryFrom<u8> for CompressionMode {
    type Error = PeerwireError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_tag(tag).ok_or(PeerwireError::UnknownEncoding(tag))
    }
}

impl From<CompressionMode> for u8 {
    fn from(mode: CompressionMode) -> Self {
        mode.tag()
    }
}

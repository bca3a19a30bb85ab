//! String-list codec with adaptive gzip compression.
//!
//! The list is wrapped in a `{"strings": [...]}` record and serialized to
//! compact JSON. Payloads larger than the caller's threshold are gzipped.
//! The block is self-describing, so the decoder never needs the threshold.
//!
//! # Example
//!
//! ```
//! use peerwire::codec::{CompressionMode, ListCodec};
//!
//! let routes = vec!["foo.bar".to_string(), "baz.>".to_string()];
//!
//! let small = ListCodec::encode(&routes, 1000).unwrap();
//! assert_eq!(small.mode(), Some(CompressionMode::Raw));
//!
//! let large = ListCodec::encode(&routes, 10).unwrap();
//! assert_eq!(large.mode(), Some(CompressionMode::Gzip));
//!
//! assert_eq!(ListCodec::decode(small.as_bytes()).unwrap(), routes);
//! assert_eq!(ListCodec::decode(large.as_bytes()).unwrap(), routes);
//! ```

use std::fmt;
use std::io::{Read, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use super::block::EncodedBlock;
use super::mode::CompressionMode;
use crate::error::{PeerwireError, Result};

/// Default size (in serialized bytes) above which payloads are gzipped.
pub const DEFAULT_COMPRESS_THRESHOLD: usize = 1024;

/// Default gzip level (same as gzip's own default).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Highest gzip level; larger configured values are clamped to this.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Name of the single field of the wire record.
const STRINGS_FIELD: &str = "strings";

/// Encode-side policy.
///
/// Never persisted in the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListCodecConfig {
    /// Serialized payloads strictly larger than this are compressed.
    pub compress_threshold: usize,
    /// gzip level, 0 (store) to 9 (best).
    pub compression_level: u32,
}

impl Default for ListCodecConfig {
    fn default() -> Self {
        Self {
            compress_threshold: DEFAULT_COMPRESS_THRESHOLD,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl ListCodecConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compression threshold.
    pub fn with_compress_threshold(mut self, threshold: usize) -> Self {
        self.compress_threshold = threshold;
        self
    }

    /// Set the gzip level.
    ///
    /// Values above 9 are clamped.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(MAX_COMPRESSION_LEVEL);
        self
    }

    fn compression(&self) -> Compression {
        Compression::new(self.compression_level.min(MAX_COMPRESSION_LEVEL))
    }
}

/// Outgoing record, borrowing the caller's strings.
#[derive(Serialize)]
struct StringListRef<'a> {
    strings: Vec<&'a str>,
}

/// Incoming record.
///
/// Keys are matched case-insensitively and unknown keys are skipped. A
/// missing or `null` `strings` field yields an empty list. Anything that is
/// not a JSON object is rejected.
struct StringList {
    strings: Vec<String>,
}

impl<'de> Deserialize<'de> for StringList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(StringListVisitor)
    }
}

struct StringListVisitor;

impl<'de> Visitor<'de> for StringListVisitor {
    type Value = StringList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with a \"strings\" array")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<StringList, A::Error> {
        let mut strings = None;
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(STRINGS_FIELD) {
                // Last occurrence wins.
                strings = map.next_value::<Option<Vec<String>>>()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(StringList {
            strings: strings.unwrap_or_default(),
        })
    }
}

/// Codec for ordered lists of strings exchanged between peers.
///
/// Stateless: every call allocates its own buffers, so any number of
/// callers may encode and decode concurrently.
pub struct ListCodec;

impl ListCodec {
    /// Encode `strings`, gzipping when the serialized record is larger
    /// than `compress_threshold` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PeerwireError::Serialization`] or
    /// [`PeerwireError::Compression`].
    pub fn encode<S: AsRef<str>>(strings: &[S], compress_threshold: usize) -> Result<EncodedBlock> {
        let config = ListCodecConfig::new().with_compress_threshold(compress_threshold);
        Self::encode_with(&config, strings)
    }

    /// Encode `strings` using an explicit config.
    ///
    /// # Errors
    ///
    /// Returns [`PeerwireError::Serialization`] or
    /// [`PeerwireError::Compression`].
    pub fn encode_with<S: AsRef<str>>(config: &ListCodecConfig, strings: &[S]) -> Result<EncodedBlock> {
        let record = StringListRef {
            strings: strings.iter().map(AsRef::as_ref).collect(),
        };
        let serialized = serde_json::to_vec(&record).map_err(PeerwireError::Serialization)?;

        let mode = CompressionMode::for_payload(serialized.len(), config.compress_threshold);
        let buf = match mode {
            CompressionMode::Raw => {
                let mut buf = Vec::with_capacity(serialized.len() + 1);
                buf.push(mode.tag());
                buf.extend_from_slice(&serialized);
                buf
            }
            CompressionMode::Gzip => {
                let mut buf = Vec::with_capacity(serialized.len() / 2 + 32);
                buf.push(mode.tag());
                let mut encoder = GzEncoder::new(buf, config.compression());
                encoder
                    .write_all(&serialized)
                    .map_err(PeerwireError::Compression)?;
                // finish() writes the trailer; the block is invalid without it.
                encoder.finish().map_err(PeerwireError::Compression)?
            }
        };

        tracing::trace!(
            "Encoded {} strings as {:?}: {} serialized bytes, {} block bytes",
            strings.len(),
            mode,
            serialized.len(),
            buf.len()
        );
        Ok(EncodedBlock::from(buf))
    }

    /// Decode a block produced by [`ListCodec::encode`].
    ///
    /// # Errors
    ///
    /// - [`PeerwireError::CorruptData`] if the block has no payload
    /// - [`PeerwireError::UnknownEncoding`] if the tag is not 0 or 1
    /// - [`PeerwireError::Decompression`] if the gzip stream is bad
    /// - [`PeerwireError::Deserialization`] if the payload is not a record
    pub fn decode(block: &[u8]) -> Result<Vec<String>> {
        let (&tag, payload) = match block.split_first() {
            Some(split) if !split.1.is_empty() => split,
            _ => {
                tracing::debug!("Rejecting string-list block of {} byte(s)", block.len());
                return Err(PeerwireError::CorruptData { len: block.len() });
            }
        };

        let mode = CompressionMode::try_from(tag).map_err(|e| {
            tracing::debug!("Rejecting string-list block with tag {}", tag);
            e
        })?;

        let record: StringList = match mode {
            CompressionMode::Raw => serde_json::from_slice::<StringList>(payload),
            CompressionMode::Gzip => serde_json::from_slice::<StringList>(&gunzip(payload)?),
        }
        .map_err(|e| {
            tracing::debug!("Malformed string-list record: {}", e);
            PeerwireError::Deserialization(e)
        })?;

        Ok(record.strings)
    }

    /// Decode an [`EncodedBlock`].
    ///
    /// # Errors
    ///
    /// Same as [`ListCodec::decode`].
    #[inline]
    pub fn decode_block(block: &EncodedBlock) -> Result<Vec<String>> {
        Self::decode(block.as_bytes())
    }
}

/// Inflate a whole gzip payload into memory.
///
/// The decoder is dropped when this returns, on success and on error.
fn gunzip(payload: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = MultiGzDecoder::new(payload);
    let mut data = Vec::with_capacity(payload.len().saturating_mul(4));
    decoder.read_to_end(&mut data).map_err(|e| {
        tracing::debug!("Failed to inflate string-list payload: {}", e);
        PeerwireError::Decompression(e)
    })?;
    Ok(data)
}

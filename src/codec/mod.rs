//! Codec module - self-describing encoding for lists of strings.
//!
//! - [`ListCodec`] - JSON record, gzipped above a size threshold
//! - [`CompressionMode`] - the leading tag byte
//! - [`EncodedBlock`] - `[tag][payload]` bytes with typed accessors
//!
//! # Design
//!
//! [`ListCodec`] is a marker struct with associated functions rather than a
//! trait object. It holds no state, so calls never need synchronization.
//!
//! # Example
//!
//! ```
//! use peerwire::codec::ListCodec;
//!
//! let block = ListCodec::encode(&["a", "b", "c"], 1000).unwrap();
//! assert_eq!(block.as_bytes()[0], 0);
//! assert_eq!(ListCodec::decode(block.as_bytes()).unwrap(), vec!["a", "b", "c"]);
//! ```

mod block;
mod list;
mod mode;

pub use block::EncodedBlock;
pub use list::{
    ListCodec, ListCodecConfig, DEFAULT_COMPRESSION_LEVEL, DEFAULT_COMPRESS_THRESHOLD,
    MAX_COMPRESSION_LEVEL,
};
pub use mode::{CompressionMode, TAG_GZIP, TAG_RAW};

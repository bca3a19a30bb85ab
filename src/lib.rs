//! # peerwire
//!
//! Encoding primitives for the peer-exchange layer of a clustered message
//! broker.
//!
//! ## Overview
//!
//! - **Codec**: self-describing string-list blocks. A one-byte tag says
//!   whether the JSON payload that follows is stored raw or gzipped; the
//!   encoder gzips only when the payload exceeds a caller-chosen threshold.
//! - **Util**: digit-only integer parsers, `host:port` parsing with a
//!   default port, URL equality, and float-seconds to `Duration`.
//!
//! Everything here is pure and stateless. Nothing blocks, spawns, or
//! shares buffers between calls.
//!
//! ## Example
//!
//! ```
//! use peerwire::codec::{CompressionMode, ListCodec};
//!
//! let subjects = vec!["orders.>", "billing.*", "orders.>"];
//! let block = ListCodec::encode(&subjects, 1024)?;
//! assert_eq!(block.mode(), Some(CompressionMode::Raw));
//!
//! let decoded = ListCodec::decode(block.as_bytes())?;
//! assert_eq!(decoded, subjects);
//! # Ok::<(), peerwire::PeerwireError>(())
//! ```

pub mod codec;
pub mod error;
pub mod util;

pub use codec::{CompressionMode, EncodedBlock, ListCodec, ListCodecConfig};
pub use error::{ErrorKind, PeerwireError, Result};

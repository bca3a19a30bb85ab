//! Parsing and conversion helpers used by configuration loading and
//! listener setup.
//!
//! - [`parse_size`] / [`parse_int64`] - digit-only parsers returning `-1` on error
//! - [`parse_host_port`] - `host:port` with a default port
//! - [`urls_are_equal`] - structural URL equality
//! - [`seconds_to_duration`] - float seconds to `Duration`

mod duration;
mod host_port;
mod number;
mod urls;

pub use duration::seconds_to_duration;
pub use host_port::{parse_host_port, HostPort};
pub use number::{parse_int64, parse_size, PARSE_ERROR};
pub use urls::urls_are_equal;

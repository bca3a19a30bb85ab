//! `host:port` parsing with a default port.
//!
//! # Example
//!
//! ```
//! use peerwire::util::parse_host_port;
//!
//! let hp = parse_host_port("127.0.0.1", 4222).unwrap();
//! assert_eq!((hp.host.as_str(), hp.port), ("127.0.0.1", 4222));
//!
//! let hp = parse_host_port("[::1]:6222", 4222).unwrap();
//! assert_eq!((hp.host.as_str(), hp.port), ("::1", 6222));
//! ```

use crate::error::{PeerwireError, Result};

const MISSING_PORT: &str = "missing port in address";
const TOO_MANY_COLONS: &str = "too many colons in address";

/// A parsed host and port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPort {
    /// Host name or address, without IPv6 brackets.
    pub host: String,
    /// Port number. May be negative if the caller's default is.
    pub port: i32,
}

/// Parse `host_port`, falling back to `default_port`.
///
/// The default applies when the port segment is missing, `0`, or `-1`.
/// Surrounding whitespace is trimmed from host and port.
///
/// # Errors
///
/// Returns [`PeerwireError::InvalidHostPort`] for empty input, input that
/// cannot be split even with the default port appended, or a port that is
/// not a decimal integer.
pub fn parse_host_port(host_port: &str, default_port: i32) -> Result<HostPort> {
    if host_port.is_empty() {
        return Err(PeerwireError::host_port(host_port, "no hostport specified"));
    }

    // Address-shape errors are retried once with the default port appended.
    let with_default;
    let (host, port) = match split_host_port(host_port) {
        Ok(split) => split,
        Err(_) => {
            with_default = format!("{}:{}", host_port, default_port);
            split_host_port(&with_default)
                .map_err(|reason| PeerwireError::host_port(host_port, reason))?
        }
    };

    let port: i32 = port
        .trim()
        .parse()
        .map_err(|e| PeerwireError::host_port(host_port, format!("invalid port: {}", e)))?;
    let port = if port == 0 || port == -1 {
        default_port
    } else {
        port
    };

    Ok(HostPort {
        host: host.trim().to_string(),
        port,
    })
}

/// Split `host:port` or `[host]:port` at the last colon.
///
/// Brackets are required around hosts containing colons. Neither part is
/// validated beyond its shape.
fn split_host_port(host_port: &str) -> std::result::Result<(&str, &str), &'static str> {
    let bytes = host_port.as_bytes();
    let i = host_port.rfind(':').ok_or(MISSING_PORT)?;

    // `[` and `]` may not appear before these offsets.
    let (host, open_from, close_from) = if bytes.first() == Some(&b'[') {
        let end = host_port.find(']').ok_or("missing ']' in address")?;
        if end + 1 == host_port.len() {
            return Err(MISSING_PORT);
        }
        if end + 1 != i {
            return Err(if bytes[end + 1] == b':' {
                TOO_MANY_COLONS
            } else {
                MISSING_PORT
            });
        }
        (&host_port[1..end], 1, end + 1)
    } else {
        let host = &host_port[..i];
        if host.contains(':') {
            return Err(TOO_MANY_COLONS);
        }
        (host, 0, 0)
    };

    if host_port[open_from..].contains('[') {
        return Err("unexpected '[' in address");
    }
    if host_port[close_from..].contains(']') {
        return Err("unexpected ']' in address");
    }

    Ok((host, &host_port[i + 1..]))
}

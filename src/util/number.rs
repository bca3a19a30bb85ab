//! Fast decimal parsers for protocol fields.
//!
//! Both parsers accept ASCII digits only: no sign, no whitespace, no
//! separators. They return `-1` instead of an error so the hot parsing path
//! stays branch-light; callers check for a negative result.

/// Returned by the parsers for empty or non-digit input.
pub const PARSE_ERROR: i64 = -1;

/// Parse a decimal size.
///
/// Returns `-1` if `d` is empty or contains anything but `0`-`9`.
/// Overflow wraps silently, like the arithmetic it replaces.
///
/// # Example
///
/// ```
/// use peerwire::util::parse_size;
///
/// assert_eq!(parse_size(b"1024"), 1024);
/// assert_eq!(parse_size(b"12a"), -1);
/// assert_eq!(parse_size(b""), -1);
/// ```
#[inline]
pub fn parse_size(d: &[u8]) -> isize {
    if d.is_empty() {
        return -1;
    }
    let mut n: isize = 0;
    for &dec in d {
        if !dec.is_ascii_digit() {
            return -1;
        }
        n = n.wrapping_mul(10).wrapping_add((dec - b'0') as isize);
    }
    n
}

/// Parse a decimal 64-bit integer.
///
/// Same contract as [`parse_size`], fixed to 64 bits.
#[inline]
pub fn parse_int64(d: &[u8]) -> i64 {
    if d.is_empty() {
        return PARSE_ERROR;
    }
    let mut n: i64 = 0;
    for &dec in d {
        if !dec.is_ascii_digit() {
            return PARSE_ERROR;
        }
        n = n.wrapping_mul(10).wrapping_add(i64::from(dec - b'0'));
    }
    n
}

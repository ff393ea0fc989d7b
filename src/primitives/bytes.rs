//! Byte-buffer helpers
//!
//! Utilities shared by the `Uint128` formatting and conversion code that
//! operate on plain byte slices.

use std::fmt::Write;

/// Renders a big-endian byte sequence as binary digits.
///
/// Each byte is written as exactly 8 zero-padded binary digits, most
/// significant bit first, and consecutive bytes are joined by `sep`.
///
/// ```
/// use numeric::primitives::bytes::format_big_endian_binary_string;
///
/// assert_eq!(format_big_endian_binary_string(&[0x01, 0xF0], "_"), "00000001_11110000");
/// assert_eq!(format_big_endian_binary_string(&[0x80], ""), "10000000");
/// ```
pub fn format_big_endian_binary_string(big_endian_bytes: &[u8], sep: &str) -> String {
    let mut out = String::with_capacity(big_endian_bytes.len() * (8 + sep.len()));

    for (i, byte) in big_endian_bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }

        // Writing into a String cannot fail.
        let _ = write!(out, "{:08b}", byte);
    }

    out
}

/// Reverses the byte order of `bytes` in place.
pub fn swap_bytes(bytes: &mut [u8]) {
    bytes.reverse();
}

/// Reverses a 16-byte buffer in place.
///
/// Converts between the little-endian and big-endian encodings of a
/// `Uint128`.
pub fn swap_bytes_16(bytes: &mut [u8; 16]) {
    for i in 0..8 {
        bytes.swap(i, 15 - i);
    }
}

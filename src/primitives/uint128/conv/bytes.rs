//! Conversions between `Uint128` and 16-byte buffers
//!
//! The endianness of every conversion is part of its name. The
//! little-endian layout is `low` followed by `high`, each little-endian;
//! the big-endian layout is `high` followed by `low`, each big-endian.
//!
//! Parsing takes a slice and checks its length instead of trusting the
//! caller, so a short or long buffer is reported as
//! [`Error::InvalidLength`].

use crate::error::{Error, Result};
use crate::primitives::Uint128;

/// Checks that `buf` holds exactly one encoded value and splits it into
/// its first and second 8-byte words.
fn split_words(buf: &[u8]) -> Result<([u8; 8], [u8; 8])> {
    if buf.len() != Uint128::BYTES {
        return Err(Error::InvalidLength {
            expected: Uint128::BYTES,
            got: buf.len(),
        });
    }

    let mut first = [0u8; 8];
    let mut second = [0u8; 8];

    first.copy_from_slice(&buf[..8]);
    second.copy_from_slice(&buf[8..]);

    Ok((first, second))
}

impl Uint128 {
    /// Reads a value from its 16-byte little-endian encoding.
    ///
    /// `low` comes from bytes `0..8`, `high` from bytes `8..16`, both read
    /// little-endian.
    pub fn from_little_endian_bytes(buf: &[u8]) -> Result<Self> {
        let (low, high) = split_words(buf)?;

        Ok(Self::new(u64::from_le_bytes(high), u64::from_le_bytes(low)))
    }

    /// Reads a value from its 16-byte big-endian encoding.
    ///
    /// `high` comes from bytes `0..8`, `low` from bytes `8..16`, both read
    /// big-endian.
    pub fn from_big_endian_bytes(buf: &[u8]) -> Result<Self> {
        let (high, low) = split_words(buf)?;

        Ok(Self::new(u64::from_be_bytes(high), u64::from_be_bytes(low)))
    }

    /// Little-endian encoding, the inverse of
    /// [`Uint128::from_little_endian_bytes`].
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];

        out[..8].copy_from_slice(&self.low.to_le_bytes());
        out[8..].copy_from_slice(&self.high.to_le_bytes());

        out
    }

    /// Big-endian encoding, the inverse of
    /// [`Uint128::from_big_endian_bytes`].
    pub fn to_be_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];

        out[..8].copy_from_slice(&self.high.to_be_bytes());
        out[8..].copy_from_slice(&self.low.to_be_bytes());

        out
    }
}

//! Hexadecimal form of `Uint128`.

use crate::error::Result;
use crate::primitives::Uint128;

impl Uint128 {
    /// 32 lowercase hex digits of the big-endian encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// Parses the form produced by [`Uint128::to_hex`].
    ///
    /// An optional `0x` prefix is accepted, and the digits must decode to
    /// exactly 16 bytes.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits)?;

        Self::from_big_endian_bytes(&bytes)
    }
}

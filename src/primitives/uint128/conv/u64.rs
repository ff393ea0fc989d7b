//! Conversions between `Uint128` and 64-bit integer representations
//!
//! A single `u64` always widens into the low half. Narrowing back fails
//! unless the high half is zero, so no bits are silently truncated.

use crate::error::Error;
use crate::primitives::Uint128;

/// Places the value in the low half, with the high half zero.
impl From<u64> for Uint128 {
    fn from(value: u64) -> Self {
        Uint128::new(0, value)
    }
}

/// Succeeds only when the upper 64 bits are zero.
impl TryFrom<Uint128> for u64 {
    type Error = Error;

    fn try_from(value: Uint128) -> Result<Self, Self::Error> {
        if value.high != 0 {
            return Err(Error::Overflow);
        }

        Ok(value.low)
    }
}

/// Builds a value from `[high, low]`.
impl From<[u64; 2]> for Uint128 {
    fn from([high, low]: [u64; 2]) -> Self {
        Uint128::new(high, low)
    }
}

/// Splits a value into `[high, low]`.
impl From<Uint128> for [u64; 2] {
    fn from(value: Uint128) -> Self {
        [value.high, value.low]
    }
}

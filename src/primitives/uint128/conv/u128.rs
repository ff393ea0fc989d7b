//! Conversions between `Uint128` and the native `u128`.
//!
//! Both directions are lossless: `high` holds the upper 64 bits of the
//! native value and `low` the lower 64 bits.

use crate::primitives::Uint128;

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Uint128::from_u128(value)
    }
}

impl From<Uint128> for u128 {
    fn from(value: Uint128) -> Self {
        value.to_u128()
    }
}

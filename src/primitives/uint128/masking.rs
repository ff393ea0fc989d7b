//! Right-aligned mask construction.

use crate::primitives::Uint128;

/// Returns a 64-bit word with its lowest `bits` bits set.
///
/// `bits == 0` yields `0` and `bits >= 64` yields `u64::MAX`; neither case
/// performs a shift by the full word width.
pub const fn mask_u64(bits: u8) -> u64 {
    if bits == 0 {
        return 0;
    }
    if bits >= 64 {
        return u64::MAX;
    }

    u64::MAX >> (64 - bits)
}

/// Returns a `Uint128` with its lowest `bits` bits set, clamped at 128.
///
/// ```
/// use numeric::primitives::{Uint128, mask};
///
/// assert_eq!(mask(0), Uint128::ZERO);
/// assert_eq!(mask(64), Uint128::new(0, u64::MAX));
/// assert_eq!(mask(96), Uint128::new(0xFFFF_FFFF, u64::MAX));
/// assert_eq!(mask(200), Uint128::MAX);
/// ```
pub const fn mask(bits: u8) -> Uint128 {
    if bits == 0 {
        return Uint128::ZERO;
    }
    if bits >= 128 {
        return Uint128::MAX;
    }
    if bits >= 64 {
        return Uint128::new(mask_u64(bits - 64), u64::MAX);
    }

    Uint128::new(0, mask_u64(bits))
}

impl Uint128 {
    /// Same as [`mask`].
    pub const fn mask(bits: u8) -> Self {
        mask(bits)
    }
}

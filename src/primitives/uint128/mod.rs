//! 128-bit unsigned integer primitive
//!
//! This module defines `Uint128`, a fixed-size 128-bit unsigned integer
//! stored as two 64-bit words.
//!
//! `Uint128` is a value type for wide bitmasks rather than an arithmetic
//! integer. It supports:
//! - bitwise logic (`and`, `or`, `xor`, complement)
//! - right-aligned mask construction
//! - logical shifts by any `u8` amount
//! - byte, hex and binary string conversions
//!
//! Shifts and masks never delegate a shift by 64 or more to the native
//! 64-bit shift operator; those cases are handled as explicit branches.

mod conv;
mod core;
mod fmt;
mod masking;
mod ops;

#[cfg(feature = "serde")]
mod serde;

pub use self::core::Uint128;
pub use self::masking::{mask, mask_u64};

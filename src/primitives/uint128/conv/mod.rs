//! Conversions for `Uint128`.
//!
//! Split by the representation on the other side of the conversion.

pub mod bytes;
pub mod hex;
pub mod u128;
pub mod u64;

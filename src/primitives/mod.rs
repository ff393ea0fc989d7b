//! Primitive types
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! semantics. They do not attempt to replicate a full big-integer library:
//! `Uint128` supports bitwise logic, masking, shifting and conversions, but
//! no arithmetic.

pub mod bytes;
mod uint128;

/// The split-word 128-bit unsigned integer and its mask constructors.
pub use uint128::{Uint128, mask, mask_u64};

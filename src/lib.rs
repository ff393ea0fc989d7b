//! Split-word 128-bit unsigned integers
//!
//! This crate provides [`Uint128`], a fixed-width 128-bit unsigned integer
//! stored as two 64-bit halves, together with the mask, shift and
//! formatting helpers needed to use it as a wide bitmask (for example an
//! IPv6 prefix mask).
//!
//! # Module overview
//!
//! - `primitives`  
//!   The [`Uint128`] value type, mask construction ([`mask`], [`mask_u64`])
//!   and byte-buffer helpers (`primitives::bytes`).
//!
//! - `error`  
//!   The error returned by the fallible boundaries: byte-buffer parsing,
//!   string and hex parsing, and narrowing conversions.
//!
//! # Design goals
//!
//! - Plain `Copy` value type, every operation returns a new value
//! - Shift and mask operations are total over `u8` amounts and never rely on
//!   a native shift by the full word width
//! - Explicit endianness at every byte boundary
//!
//! [`Uint128`]: primitives::Uint128
//! [`mask`]: primitives::mask
//! [`mask_u64`]: primitives::mask_u64

pub mod error;
pub mod primitives;

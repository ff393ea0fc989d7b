//! Operator traits for `Uint128`
//!
//! The operators forward to the inherent methods so that both spellings
//! share one implementation. Only bitwise operators and shifts are
//! provided; `Uint128` deliberately has no arithmetic.
//!
//! Unlike the native integers, `<<` and `>>` never panic: any amount of
//! 128 or more produces zero.

use crate::primitives::Uint128;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

/// Bitwise AND between two 128-bit values.
impl BitAnd<Uint128> for Uint128 {
    type Output = Uint128;

    fn bitand(self, rhs: Uint128) -> Self::Output {
        self.and(rhs)
    }
}

/// Bitwise OR between two 128-bit values.
impl BitOr<Uint128> for Uint128 {
    type Output = Uint128;

    fn bitor(self, rhs: Uint128) -> Self::Output {
        self.or(rhs)
    }
}

/// Bitwise XOR between two 128-bit values.
impl BitXor<Uint128> for Uint128 {
    type Output = Uint128;

    fn bitxor(self, rhs: Uint128) -> Self::Output {
        self.xor(rhs)
    }
}

impl Not for Uint128 {
    type Output = Uint128;

    fn not(self) -> Self::Output {
        Uint128::not(self)
    }
}

impl BitAndAssign<Uint128> for Uint128 {
    fn bitand_assign(&mut self, rhs: Uint128) {
        *self = self.and(rhs);
    }
}

impl BitOrAssign<Uint128> for Uint128 {
    fn bitor_assign(&mut self, rhs: Uint128) {
        *self = self.or(rhs);
    }
}

impl BitXorAssign<Uint128> for Uint128 {
    fn bitxor_assign(&mut self, rhs: Uint128) {
        *self = self.xor(rhs);
    }
}

/// Logical left shift (`<<`) by a bit count.
impl Shl<u8> for Uint128 {
    type Output = Uint128;

    fn shl(self, rhs: u8) -> Self::Output {
        self.shift_left(rhs)
    }
}

/// Logical right shift (`>>`) by a bit count.
impl Shr<u8> for Uint128 {
    type Output = Uint128;

    fn shr(self, rhs: u8) -> Self::Output {
        self.shift_right(rhs)
    }
}

impl ShlAssign<u8> for Uint128 {
    fn shl_assign(&mut self, rhs: u8) {
        *self = self.shift_left(rhs);
    }
}

impl ShrAssign<u8> for Uint128 {
    fn shr_assign(&mut self, rhs: u8) {
        *self = self.shift_right(rhs);
    }
}

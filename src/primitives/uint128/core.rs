//! The `Uint128` value type and its word-level operations.

/// Fixed-size 128-bit unsigned integer made of two 64-bit halves.
///
/// Bit 127 is the most significant bit of `high`, bit 0 the least
/// significant bit of `low`. Every combination of the two words is a valid
/// value.
///
/// The field order makes the derived `Ord` match numeric ordering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint128 {
    /// Bits 64..=127.
    pub high: u64,
    /// Bits 0..=63.
    pub low: u64,
}

impl Uint128 {
    /// The value zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// The value one.
    pub const ONE: Self = Self::new(0, 1);

    /// The maximum representable value (2¹²⁸ − 1), every bit set.
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

    /// Width of the value in bits.
    pub const BITS: u32 = 128;

    /// Width of the byte encodings.
    pub const BYTES: usize = 16;

    /// Builds a value from its two halves.
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    pub const fn from_u128(value: u128) -> Self {
        Self::new((value >> 64) as u64, value as u64)
    }

    pub const fn to_u128(self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }

    pub const fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    pub const fn and(self, other: Self) -> Self {
        Self::new(self.high & other.high, self.low & other.low)
    }

    pub const fn or(self, other: Self) -> Self {
        Self::new(self.high | other.high, self.low | other.low)
    }

    pub const fn xor(self, other: Self) -> Self {
        Self::new(self.high ^ other.high, self.low ^ other.low)
    }

    /// Bitwise complement of both halves.
    pub const fn not(self) -> Self {
        Self::new(!self.high, !self.low)
    }

    /// Logical left shift of the full 128-bit value.
    ///
    /// - `amount == 0` returns `self`
    /// - `amount >= 128` returns zero
    /// - `64 <= amount < 128` moves `low` into `high` and shifts it by the
    ///   remaining `amount - 64` bits
    /// - otherwise the bits pushed out of `low` carry into `high`
    #[cfg(not(feature = "speed"))]
    pub const fn shift_left(self, amount: u8) -> Self {
        if amount == 0 {
            return self;
        }
        if amount >= 128 {
            return Self::ZERO;
        }
        if amount >= 64 {
            return Self::new(self.low << (amount - 64), 0);
        }

        Self::new(
            (self.high << amount) | (self.low >> (64 - amount)),
            self.low << amount,
        )
    }

    /// Logical right shift of the full 128-bit value.
    ///
    /// Mirror image of [`Uint128::shift_left`]: `high` carries into `low`,
    /// and amounts of 128 or more clear every bit.
    #[cfg(not(feature = "speed"))]
    pub const fn shift_right(self, amount: u8) -> Self {
        if amount == 0 {
            return self;
        }
        if amount >= 128 {
            return Self::ZERO;
        }
        if amount >= 64 {
            return Self::new(0, self.high >> (amount - 64));
        }

        Self::new(
            self.high >> amount,
            (self.low >> amount) | (self.high << (64 - amount)),
        )
    }

    /// Logical left shift through the native `u128` (fast path).
    ///
    /// Amounts of 128 or more yield zero.
    #[cfg(feature = "speed")]
    pub const fn shift_left(self, amount: u8) -> Self {
        match self.to_u128().checked_shl(amount as u32) {
            Some(value) => Self::from_u128(value),
            None => Self::ZERO,
        }
    }

    /// Logical right shift through the native `u128` (fast path).
    ///
    /// Amounts of 128 or more yield zero.
    #[cfg(feature = "speed")]
    pub const fn shift_right(self, amount: u8) -> Self {
        match self.to_u128().checked_shr(amount as u32) {
            Some(value) => Self::from_u128(value),
            None => Self::ZERO,
        }
    }

    /// Counts the zero bits above the most significant set bit.
    ///
    /// # Returns
    /// A value in the range `0..=128`.
    pub const fn leading_zeros(self) -> u32 {
        if self.high != 0 {
            self.high.leading_zeros()
        } else {
            64 + self.low.leading_zeros()
        }
    }

    /// Counts the zero bits below the least significant set bit.
    ///
    /// # Returns
    /// A value in the range `0..=128`.
    pub const fn trailing_zeros(self) -> u32 {
        if self.low != 0 {
            self.low.trailing_zeros()
        } else {
            64 + self.high.trailing_zeros()
        }
    }

    /// Number of set bits. For a mask this is its prefix length.
    pub const fn count_ones(self) -> u32 {
        self.high.count_ones() + self.low.count_ones()
    }
}

//! Binary string formatting and parsing for `Uint128`
//!
//! Both formats list the 16 bytes most significant first (`high` then
//! `low`, each big-endian), each byte as 8 binary digits:
//! - `format_string`: groups joined by `_`, always 143 characters
//! - `canonical_string`: no separator, always 128 characters
//!
//! Parsing accepts either form.

use crate::error::{Error, Result};
use crate::primitives::Uint128;
use crate::primitives::bytes::format_big_endian_binary_string;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

impl Uint128 {
    /// Binary digits grouped per byte, e.g. `00000000_..._11111111`.
    pub fn format_string(&self) -> String {
        format_big_endian_binary_string(&self.to_be_bytes(), "_")
    }

    /// The 128 binary digits without separators.
    pub fn canonical_string(&self) -> String {
        format_big_endian_binary_string(&self.to_be_bytes(), "")
    }
}

impl Display for Uint128 {
    /// Formats the value as its canonical 128-digit binary string.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

impl FromStr for Uint128 {
    type Err = Error;

    /// Parses exactly 128 binary digits, most significant first.
    ///
    /// `_` separators are skipped wherever they appear.
    fn from_str(s: &str) -> Result<Self> {
        let mut value = Uint128::ZERO;
        let mut digits = 0usize;

        for (position, digit) in s.chars().enumerate() {
            let bit = match digit {
                '0' => Uint128::ZERO,
                '1' => Uint128::ONE,
                '_' => continue,
                _ => return Err(Error::InvalidDigit { digit, position }),
            };

            if digits < 128 {
                value = value.shift_left(1).or(bit);
            }
            digits += 1;
        }

        if digits != 128 {
            return Err(Error::InvalidDigitCount(digits));
        }

        Ok(value)
    }
}

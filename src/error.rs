//! Error type shared by the fallible conversions of this crate.
//!
//! Every arithmetic and bitwise operation on [`Uint128`] is total. Only the
//! boundaries that read external input (byte buffers, strings) or narrow the
//! value into a smaller integer can fail.
//!
//! [`Uint128`]: crate::primitives::Uint128

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid buffer length, expected: {expected}, got: {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("invalid binary digit count, expected: 128, got: {0}")]
    InvalidDigitCount(usize),

    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("value does not fit in the target integer")]
    Overflow,
}

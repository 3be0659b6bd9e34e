//! Positional base conversion over an arbitrary digit alphabet.
//!
//! Digits are produced least-significant first into a fixed stack buffer and
//! emitted most-significant first as a single span, so rendering depth does
//! not depend on the call stack. The widest case is a `u64` in base 2.

use std::io::{self, Write};

use thiserror::Error;

use super::sink::emit;

/// Maximum number of digits any `u64` can need (base 2).
pub const MAX_DIGITS: usize = 64;

/// An ordered set of digit bytes; `digits[0]` has value 0 and the length is
/// the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitAlphabet<'a> {
    digits: &'a [u8],
}

/// Reasons a custom alphabet is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("digit alphabet needs at least 2 digits, got {0}")]
    TooShort(usize),
    #[error("digit {digit:?} appears more than once (positions {first} and {second})")]
    DuplicateDigit {
        digit: char,
        first: usize,
        second: usize,
    },
}

impl DigitAlphabet<'static> {
    pub const DECIMAL: Self = Self {
        digits: b"0123456789",
    };
    pub const HEX_LOWER: Self = Self {
        digits: b"0123456789abcdef",
    };
    pub const HEX_UPPER: Self = Self {
        digits: b"0123456789ABCDEF",
    };
}

impl<'a> DigitAlphabet<'a> {
    /// Validate a custom alphabet.
    pub fn new(digits: &'a [u8]) -> Result<Self, AlphabetError> {
        if digits.len() < 2 {
            return Err(AlphabetError::TooShort(digits.len()));
        }
        for (second, &d) in digits.iter().enumerate() {
            if let Some(first) = digits[..second].iter().position(|&p| p == d) {
                return Err(AlphabetError::DuplicateDigit {
                    digit: char::from(d),
                    first,
                    second,
                });
            }
        }
        Ok(Self { digits })
    }

    #[must_use]
    pub fn base(&self) -> u64 {
        self.digits.len() as u64
    }

    #[must_use]
    pub fn digits(&self) -> &'a [u8] {
        self.digits
    }

    fn digit(&self, value: u64) -> u8 {
        self.digits[value as usize]
    }
}

/// Render `value` into the END of `buf`. Returns the number of digits
/// written; the digits occupy `buf[MAX_DIGITS - count..]`.
pub fn render_digits(
    mut value: u64,
    alphabet: &DigitAlphabet<'_>,
    buf: &mut [u8; MAX_DIGITS],
) -> usize {
    let base = alphabet.base();
    let mut pos = MAX_DIGITS;
    loop {
        pos -= 1;
        buf[pos] = alphabet.digit(value % base);
        value /= base;
        if value == 0 {
            break;
        }
    }
    MAX_DIGITS - pos
}

/// Write `value` in the given alphabet. Returns the bytes written.
pub fn write_unsigned<W: Write + ?Sized>(
    out: &mut W,
    value: u64,
    alphabet: &DigitAlphabet<'_>,
) -> io::Result<usize> {
    let mut digits = [0u8; MAX_DIGITS];
    let count = render_digits(value, alphabet, &mut digits);
    emit(out, &digits[MAX_DIGITS - count..])
}

/// Write `value` in the given alphabet with a leading `-` when negative.
///
/// The magnitude is taken in the unsigned domain, so `i64::MIN` renders
/// without overflow.
pub fn write_signed<W: Write + ?Sized>(
    out: &mut W,
    value: i64,
    alphabet: &DigitAlphabet<'_>,
) -> io::Result<usize> {
    let mut written = 0;
    if value < 0 {
        written += emit(out, b"-")?;
    }
    written += write_unsigned(out, value.unsigned_abs(), alphabet)?;
    Ok(written)
}

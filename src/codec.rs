//! Arbitrary-base decoding of share values
//!
//! Share values arrive as digit strings in any base from 2 to 36. Digits above 9
//! are the letters `a`..=`z` (case-insensitive), so `"ff"`, `"FF"` and `"fF"` all
//! decode to 255 in base 16.
//!
//! Values routinely exceed 128 bits, so decoding accumulates into an unbounded
//! [`BigInt`] from the most significant digit down.
//!
//! # Examples
//!
//! ```rust
//! use shamir_recover::codec::decode;
//! use shamir_recover::domain::Radix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let value = decode("213", Radix::new(4)?)?;
//! assert_eq!(value, 39.into());
//!
//! // 'g' is not a hexadecimal digit
//! assert!(decode("e1g", Radix::new(16)?).is_err());
//! # Ok(())
//! # }
//! ```

use num_bigint::BigInt;
use num_traits::Zero;

use crate::domain::Radix;
use crate::error::{Error, Result};

/// Maps a character to its digit value, independent of any base
///
/// Returns `None` for anything outside `0-9`, `a-z` and `A-Z`.
#[inline]
fn digit_value(c: char) -> Option<u32> {
    c.to_digit(Radix::MAX)
}

/// Decodes a digit string in the given base into an exact integer
///
/// # Errors
/// - [`Error::EmptyValue`] if `value` is empty
/// - [`Error::InvalidDigit`] if a character is outside the alphabet or not below the base
pub fn decode(value: &str, radix: Radix) -> Result<BigInt> {
    if value.is_empty() {
        return Err(Error::EmptyValue);
    }

    let base = *radix;
    let mut result = BigInt::zero();

    for (position, c) in value.chars().enumerate() {
        let digit = digit_value(c)
            .filter(|&d| d < base)
            .ok_or(Error::InvalidDigit {
                digit: c,
                position,
                base,
            })?;

        result *= base;
        result += digit;
    }

    Ok(result)
}

/// Decodes a digit string with a raw, not yet validated base
///
/// # Errors
/// Returns [`Error::InvalidBase`] when `base` is outside 2..=36, otherwise as [`decode`]
pub fn decode_with_base(value: &str, base: u32) -> Result<BigInt> {
    decode(value, Radix::new(base)?)
}

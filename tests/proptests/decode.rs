//! Property tests for arbitrary-base decoding

use num_bigint::{BigInt, BigUint};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir_recover::Error;
use shamir_recover::codec::decode;
use shamir_recover::domain::Radix;

/// Wrapper for valid bases (2..=36)
#[derive(Clone, Copy, Debug)]
struct ValidRadix(u32);

impl Arbitrary for ValidRadix {
    fn arbitrary(g: &mut Gen) -> Self {
        ValidRadix(u32::arbitrary(g) % 35 + 2)
    }
}

/// Wrapper for unsigned integers of up to a few hundred bits
#[derive(Clone, Debug)]
struct BigValue(BigUint);

impl Arbitrary for BigValue {
    fn arbitrary(g: &mut Gen) -> Self {
        let bytes: Vec<u8> = Vec::arbitrary(g);
        BigValue(BigUint::from_bytes_be(&bytes))
    }
}

/// Randomly flips letter case, which must not change the decoded value
fn scramble_case(digits: &str, g: &mut Gen) -> String {
    digits
        .chars()
        .map(|c| {
            if bool::arbitrary(g) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// Test that decoding the canonical rendering in any base gives back the value
#[quickcheck]
fn prop_decode_matches_positional_value(value: BigValue, radix: ValidRadix) -> bool {
    let BigValue(n) = value;
    let ValidRadix(base) = radix;
    let digits = n.to_str_radix(base);

    let Ok(decoded) = decode(&digits, Radix::new(base).unwrap()) else {
        return false;
    };

    decoded == BigInt::from(n)
}

/// Test that leading zeros and letter case are irrelevant, and that re-encoding
/// reproduces the digits with leading zeros stripped
#[quickcheck]
fn prop_decode_round_trip_ignores_padding_and_case(
    value: BigValue,
    radix: ValidRadix,
    padding: u8,
) -> bool {
    let BigValue(n) = value;
    let ValidRadix(base) = radix;
    let canonical = n.to_str_radix(base);

    let mut g = Gen::new(canonical.len() + 1);
    let padded = format!(
        "{}{}",
        "0".repeat(usize::from(padding % 8)),
        scramble_case(&canonical, &mut g)
    );

    let Ok(decoded) = decode(&padded, Radix::new(base).unwrap()) else {
        return false;
    };

    decoded.to_str_radix(base) == canonical
}

/// Test that any digit at or above the base is reported, at its position
#[quickcheck]
fn prop_digit_outside_base_is_rejected(value: BigValue, radix: ValidRadix, offset: u32) -> bool {
    let BigValue(n) = value;
    let ValidRadix(base) = radix;
    if base == 36 {
        return true; // every alphanumeric digit is valid
    }

    let bad_value = base + offset % (36 - base);
    let bad = char::from_digit(bad_value, 36).unwrap();
    let prefix = n.to_str_radix(base);
    let digits = format!("{prefix}{bad}");

    match decode(&digits, Radix::new(base).unwrap()) {
        Err(Error::InvalidDigit {
            digit,
            position,
            base: reported,
        }) => digit == bad && position == prefix.len() && reported == base,
        _ => false,
    }
}

/// Test that bases outside 2..=36 are rejected up front
#[quickcheck]
fn prop_invalid_base_is_rejected(base: u32) -> bool {
    let valid = (2..=36).contains(&base);
    Radix::new(base).is_ok() == valid
}

//! Modular arithmetic over exact-precision integers

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Extended Euclidean algorithm
///
/// Returns `(gcd, x, y)` with `a*x + b*y = gcd`. Inputs are expected to be
/// non-negative; for `a = 0` the result is `(b, 0, 1)`.
///
/// Iterative, so arbitrarily large operands never grow the call stack.
#[must_use]
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    // Invariant: old_r = a*old_s + b*old_t and r = a*s + b*t
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);

        let next_t = &old_t - &quotient * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Reduces `value` into `[0, modulus)`, whatever its sign
///
/// `modulus` must be positive.
#[inline]
#[must_use]
pub fn normalize(value: &BigInt, modulus: &BigInt) -> BigInt {
    value.mod_floor(modulus)
}

/// Computes the inverse of `a` modulo `m`, as an integer in `[0, m)`
///
/// # Errors
/// Returns [`Error::ModularInverseUndefined`] when `gcd(a, m) != 1`, which
/// includes every `a` congruent to 0 and any modulus below 2.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Result<BigInt> {
    let undefined = || Error::ModularInverseUndefined {
        value: a.clone(),
        modulus: m.clone(),
    };

    if m <= &BigInt::one() {
        return Err(undefined());
    }

    let reduced = normalize(a, m);
    let (gcd, x, _) = extended_gcd(&reduced, m);
    if !gcd.is_one() {
        return Err(undefined());
    }

    Ok(normalize(&x, m))
}

/// Checks that a modulus can define a field for interpolation
///
/// # Errors
/// Returns [`Error::InvalidModulus`] for moduli below 2
pub(crate) fn check_modulus(modulus: &BigInt) -> Result<()> {
    if modulus <= &BigInt::one() {
        return Err(Error::InvalidModulus(modulus.clone()));
    }
    Ok(())
}

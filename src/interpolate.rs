//! Lagrange interpolation at x = 0
//!
//! Given `k` points on a degree `k - 1` polynomial, the secret is `f(0)`:
//!
//! ```text
//!            ---          ---   (0 - x_j)
//!   f(0) =   \    y_i *   | |  -----------
//!            /            j!=i  (x_i - x_j)
//!            ---
//!             i
//! ```
//!
//! Two arithmetic domains are available, chosen explicitly by the caller:
//! - [`Mode::Exact`] sums the terms as exact rationals and requires the total to
//!   be an integer.
//! - [`Mode::Modular`] performs every operation in the prime field `Z/pZ`.

use std::collections::HashSet;
use std::sync::LazyLock;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use tracing::{debug, trace};

use crate::domain::Threshold;
use crate::error::{Error, Result};
use crate::modular::{check_modulus, mod_inverse, normalize};

/// The Mersenne prime 2^127 - 1, the default field modulus
pub static DEFAULT_PRIME: LazyLock<BigInt> = LazyLock::new(|| (BigInt::one() << 127) - 1);

/// A decoded share: `y = f(x)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    #[must_use]
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Arithmetic domain for interpolation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Exact rational arithmetic over the integers
    Exact,
    /// Arithmetic modulo a prime
    Modular { modulus: BigInt },
}

impl Mode {
    /// Modular mode over [`DEFAULT_PRIME`]
    #[must_use]
    pub fn modular() -> Self {
        Self::Modular {
            modulus: DEFAULT_PRIME.clone(),
        }
    }
}

/// Reconstructs the secret `f(0)` from the first `k` points
///
/// Points beyond the threshold are ignored; the caller controls which points
/// come first.
///
/// # Errors
/// - [`Error::InsufficientPoints`] if fewer than `k` points are given
/// - [`Error::DuplicateXCoordinate`] if two selected points share an x value
/// - [`Error::NonIntegerResult`] in exact mode when the points do not lie on an
///   integer-valued polynomial at 0
/// - [`Error::InvalidModulus`] / [`Error::ModularInverseUndefined`] in modular mode
pub fn reconstruct_secret(points: &[Point], threshold: Threshold, mode: &Mode) -> Result<BigInt> {
    let selected = select_points(points, threshold)?;

    for (idx, point) in selected.iter().enumerate() {
        debug!(idx, x = %point.x, y = %point.y, "selected point");
    }

    match mode {
        Mode::Exact => interpolate_exact(selected),
        Mode::Modular { modulus } => interpolate_modular(selected, modulus),
    }
}

/// Takes the first `k` points and checks their x values are pairwise distinct
fn select_points(points: &[Point], threshold: Threshold) -> Result<&[Point]> {
    let k = *threshold;
    if points.len() < k {
        return Err(Error::InsufficientPoints {
            required: k,
            available: points.len(),
        });
    }

    let selected = &points[..k];
    let mut seen = HashSet::with_capacity(k);
    for point in selected {
        if !seen.insert(&point.x) {
            return Err(Error::DuplicateXCoordinate(point.x.clone()));
        }
    }

    Ok(selected)
}

/// Lagrange basis numerator and denominator for point `i` at x = 0
fn basis(points: &[Point], i: usize) -> (BigInt, BigInt) {
    let xi = &points[i].x;
    let mut numerator = BigInt::one();
    let mut denominator = BigInt::one();

    for (j, point) in points.iter().enumerate() {
        if i != j {
            numerator *= -&point.x;
            denominator *= xi - &point.x;
        }
    }

    (numerator, denominator)
}

/// Sums the terms as one fraction, dividing only once at the end
fn interpolate_exact(points: &[Point]) -> Result<BigInt> {
    let mut sum_num = BigInt::zero();
    let mut sum_den = BigInt::one();

    for (i, point) in points.iter().enumerate() {
        let (numerator, denominator) = basis(points, i);
        let term_num = &point.y * numerator;
        trace!(i, %term_num, %denominator, "exact term");

        // a/b + c/d = (a*d + c*b) / (b*d)
        sum_num = &sum_num * &denominator + term_num * &sum_den;
        sum_den *= denominator;

        let gcd = sum_num.gcd(&sum_den);
        if !gcd.is_one() {
            sum_num /= &gcd;
            sum_den /= &gcd;
        }
        if sum_den.is_negative() {
            sum_num = -sum_num;
            sum_den = -sum_den;
        }
    }

    // Reduced fraction: integral exactly when the denominator is 1
    if !sum_den.is_one() {
        return Err(Error::NonIntegerResult {
            numerator: sum_num,
            denominator: sum_den,
        });
    }

    Ok(sum_num)
}

fn interpolate_modular(points: &[Point], modulus: &BigInt) -> Result<BigInt> {
    check_modulus(modulus)?;

    let mut sum = BigInt::zero();

    for (i, point) in points.iter().enumerate() {
        let xi = &point.x;
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (j, other) in points.iter().enumerate() {
            if i != j {
                numerator = (numerator * normalize(&-&other.x, modulus)) % modulus;
                denominator = (denominator * normalize(&(xi - &other.x), modulus)) % modulus;
            }
        }

        let inverse = mod_inverse(&denominator, modulus)?;
        let term = (normalize(&point.y, modulus) * numerator % modulus) * inverse % modulus;
        trace!(i, %term, "modular term");

        sum = (sum + term) % modulus;
    }

    Ok(sum)
}

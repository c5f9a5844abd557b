//! Property tests for secret reconstruction

use std::collections::BTreeSet;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir_recover::domain::Threshold;
use shamir_recover::modular::{extended_gcd, mod_inverse};
use shamir_recover::{DEFAULT_PRIME, Error, Mode, Point, reconstruct_secret};

/// Wrapper for a random polynomial of degree 1..=9 with integer coefficients
#[derive(Clone, Debug)]
struct Polynomial {
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    fn threshold(&self) -> Threshold {
        Threshold::new(self.coefficients.len()).unwrap()
    }

    fn secret(&self) -> &BigInt {
        &self.coefficients[0]
    }

    fn evaluate(&self, x: &BigInt) -> BigInt {
        // Horner's rule, highest coefficient first
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * x + c)
    }
}

impl Arbitrary for Polynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let k = usize::arbitrary(g) % 9 + 2;
        let coefficients = (0..k)
            .map(|_| {
                // Mix of small values and full 64-bit magnitudes
                let scale = BigInt::from(i64::arbitrary(g));
                scale * i64::arbitrary(g) + i32::arbitrary(g)
            })
            .collect();
        Polynomial { coefficients }
    }
}

/// Wrapper for a polynomial with non-negative coefficients
#[derive(Clone, Debug)]
struct NonNegativePolynomial(Polynomial);

impl Arbitrary for NonNegativePolynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let k = usize::arbitrary(g) % 9 + 2;
        let coefficients = (0..k).map(|_| BigInt::from(u64::arbitrary(g))).collect();
        NonNegativePolynomial(Polynomial { coefficients })
    }
}

/// Distinct positive share indices, in random order
#[derive(Clone, Debug)]
struct Indices(Vec<u64>);

impl Arbitrary for Indices {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut seen = BTreeSet::new();
        let mut indices = Vec::new();
        while indices.len() < 10 {
            let x = u64::arbitrary(g) % 1000 + 1;
            if seen.insert(x) {
                indices.push(x);
            }
        }
        Indices(indices)
    }
}

fn shares(poly: &Polynomial, indices: &Indices) -> Vec<Point> {
    indices
        .0
        .iter()
        .map(|&x| {
            let x = BigInt::from(x);
            let y = poly.evaluate(&x);
            Point { x, y }
        })
        .collect()
}

/// Test that exact interpolation recovers f(0) for any degree from 1 to 9
#[quickcheck]
fn prop_exact_recovers_constant_term(poly: Polynomial, indices: Indices) -> bool {
    let points = shares(&poly, &indices);
    match reconstruct_secret(&points, poly.threshold(), &Mode::Exact) {
        Ok(secret) => &secret == poly.secret(),
        Err(_) => false,
    }
}

/// Test that modular interpolation yields f(0) reduced into the field
#[quickcheck]
fn prop_modular_recovers_reduced_constant_term(poly: Polynomial, indices: Indices) -> bool {
    let points = shares(&poly, &indices);
    let Ok(secret) = reconstruct_secret(&points, poly.threshold(), &Mode::modular()) else {
        return false;
    };
    secret == poly.secret().mod_floor(&DEFAULT_PRIME)
}

/// Test that both modes agree when the secret already lies in [0, p)
#[quickcheck]
fn prop_modes_agree_for_field_sized_secrets(poly: NonNegativePolynomial, indices: Indices) -> bool {
    let NonNegativePolynomial(poly) = poly;
    let points = shares(&poly, &indices);

    let exact = reconstruct_secret(&points, poly.threshold(), &Mode::Exact);
    let modular = reconstruct_secret(&points, poly.threshold(), &Mode::modular());

    match (exact, modular) {
        (Ok(exact), Ok(modular)) => exact < *DEFAULT_PRIME && exact == modular,
        _ => false,
    }
}

/// Test that any reordering or subset of k shares gives the same secret
#[quickcheck]
fn prop_any_k_shares_suffice(poly: Polynomial, indices: Indices, skip: usize) -> bool {
    let points = shares(&poly, &indices);
    let k = *poly.threshold();
    let start = skip % (points.len() - k + 1);

    let mut selection: Vec<Point> = points[start..].to_vec();
    selection.reverse();

    match reconstruct_secret(&selection, poly.threshold(), &Mode::Exact) {
        Ok(secret) => &secret == poly.secret(),
        Err(_) => false,
    }
}

/// Test that a repeated x among the selected points is always reported
#[quickcheck]
fn prop_duplicate_x_is_rejected(
    poly: Polynomial,
    indices: Indices,
    from: usize,
    to: usize,
) -> bool {
    let mut points = shares(&poly, &indices);
    let k = *poly.threshold();
    let from = from % k;
    let to = to % k;
    if from == to {
        return true;
    }
    points[to] = points[from].clone();

    [Mode::Exact, Mode::modular()].iter().all(|mode| {
        matches!(
            reconstruct_secret(&points, poly.threshold(), mode),
            Err(Error::DuplicateXCoordinate(x)) if x == points[from].x
        )
    })
}

/// Test that fewer than k points are reported rather than interpolated
#[quickcheck]
fn prop_too_few_points_is_rejected(poly: Polynomial, indices: Indices) -> bool {
    let points = shares(&poly, &indices);
    let k = *poly.threshold();
    matches!(
        reconstruct_secret(&points[..k - 1], poly.threshold(), &Mode::Exact),
        Err(Error::InsufficientPoints { required, available }) if required == k && available == k - 1
    )
}

/// Test the defining law of the modular inverse over the default prime
#[quickcheck]
fn prop_mod_inverse_law(a: u128) -> bool {
    let p = &*DEFAULT_PRIME;
    let a = BigInt::from(a).mod_floor(p);
    if a.is_zero() {
        return mod_inverse(&a, p).is_err();
    }

    match mod_inverse(&a, p) {
        Ok(inv) => inv >= BigInt::zero() && &inv < p && (&a * inv).mod_floor(p).is_one(),
        Err(_) => false,
    }
}

/// Test the Bezout identity of the extended Euclidean algorithm
#[quickcheck]
fn prop_extended_gcd_bezout(a: u64, b: u64) -> bool {
    let (a, b) = (BigInt::from(a), BigInt::from(b));
    let (gcd, x, y) = extended_gcd(&a, &b);
    gcd == a.gcd(&b) && &a * x + &b * y == gcd
}

//! Error taxonomy for decoding and interpolation

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised by the computation core
///
/// Every variant is terminal for the reconstruction call that produced it;
/// no partial secret is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Base {0} is outside the supported range 2..=36")]
    InvalidBase(u32),

    #[error("Invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("Share value is empty")]
    EmptyValue,

    #[error("Duplicate x-coordinate {0} among the selected points")]
    DuplicateXCoordinate(BigInt),

    #[error("Interpolated value {numerator}/{denominator} is not an integer")]
    NonIntegerResult {
        numerator: BigInt,
        denominator: BigInt,
    },

    #[error("{value} has no inverse modulo {modulus}")]
    ModularInverseUndefined { value: BigInt, modulus: BigInt },

    #[error("Insufficient points: need at least {required}, but only {available} provided")]
    InsufficientPoints { required: usize, available: usize },

    #[error("Threshold must be at least 1")]
    InvalidThreshold,

    #[error("Share count must be at least 1")]
    InvalidShareCount,

    #[error("Threshold {threshold} cannot exceed share count {share_count}")]
    ThresholdExceedsShareCount { threshold: usize, share_count: usize },

    #[error("Share index must be at least 1")]
    InvalidShareIndex,

    #[error("Modulus {0} must be at least 2")]
    InvalidModulus(BigInt),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Reconstruct Shamir secrets from arbitrary-base shares
//!
//! The pipeline is linear: a share record is decoded into points
//! ([`codec`]), and the first `k` points are interpolated at x = 0
//! ([`interpolate`]), either exactly or in a prime field ([`modular`]).

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod input;
pub mod interpolate;
pub mod modular;

pub use error::{Error, Result};
pub use interpolate::{DEFAULT_PRIME, Mode, Point, reconstruct_secret};

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use num_bigint::BigInt;

use crate::domain::Radix;
use crate::modular::check_modulus;

/// Validates that a base lies in 2..=36
fn validate_base(s: &str) -> Result<Radix, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Radix::new(value).map_err(|e| e.to_string())
}

/// Parses a decimal field modulus of at least 2
fn parse_prime(s: &str) -> Result<BigInt, String> {
    let value = BigInt::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| format!("'{s}' is not a valid decimal integer"))?;

    check_modulus(&value).map_err(|e| e.to_string())?;
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Exact rational arithmetic
    Exact,
    /// Arithmetic modulo a prime
    Modular,
}

#[derive(Parser)]
#[command(name = "shamir-recover")]
#[command(about = "Reconstruct a Shamir secret from arbitrary-base shares by Lagrange interpolation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconstruct the secret from a JSON share record
    Recover {
        /// Share record file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Arithmetic used for interpolation
        #[arg(short, long, value_enum, default_value_t = ModeArg::Exact)]
        mode: ModeArg,

        /// Field modulus for modular arithmetic, in decimal (default 2^127 - 1)
        #[arg(short, long, value_parser = parse_prime)]
        prime: Option<BigInt>,

        /// Retry in the prime field when the exact result is not an integer
        #[arg(long, conflicts_with = "mode")]
        fallback: bool,

        /// Print a JSON report instead of the bare secret
        #[arg(long)]
        json: bool,
    },
    /// Decode a single value from the given base to decimal
    Decode {
        /// Numeral base of the value (2..=36)
        #[arg(short, long, value_parser = validate_base)]
        base: Radix,

        /// Digits of the value
        value: String,
    },
}

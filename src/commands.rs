use anyhow::{Context, Result};
use num_bigint::BigInt;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::codec;
use crate::error::Error;
use crate::input::ShareSet;
use crate::interpolate::{self, Mode, Point};

/// How the caller wants the secret computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Exact rational interpolation only
    Exact,
    /// Interpolation in the field of the given prime only
    Modular { modulus: BigInt },
    /// Exact interpolation, retried in the field only if the exact result is not an integer
    ExactThenModular { modulus: BigInt },
}

/// Arithmetic domain that produced a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeUsed {
    Exact,
    Modular,
}

/// A point as rendered in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPoint {
    pub x: String,
    pub y: String,
}

/// Result of a reconstruction (for JSON serialization)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recovery {
    /// The reconstructed secret in decimal
    pub secret: String,
    /// Which arithmetic produced the secret
    pub mode: ModeUsed,
    /// Total share count declared by the record
    pub share_count: usize,
    /// Threshold declared by the record
    pub threshold: usize,
    /// Points handed to the interpolator, in order
    pub points: Vec<ReportPoint>,
}

/// Decode the shares of a record into points
///
/// Indices `1..=n` are visited in ascending order; shares indexed above `n`
/// are ignored.
///
/// # Errors
/// Returns an error naming the share whose value fails to decode
pub fn decode_points(shares: &ShareSet) -> Result<Vec<Point>> {
    let share_count = *shares.config().share_count() as u64;
    let mut points = Vec::with_capacity(shares.len());

    for share in shares.iter() {
        if *share.index > share_count {
            warn!(
                index = *share.index,
                share_count, "ignoring share with index beyond share count"
            );
            continue;
        }

        let y = codec::decode(&share.value, share.radix)
            .with_context(|| format!("Failed to decode share #{}", share.index))?;
        debug!(
            x = *share.index,
            %y,
            base = *share.radix,
            value = %share.value,
            "decoded share"
        );
        points.push(Point {
            x: share.index.to_bigint(),
            y,
        });
    }

    Ok(points)
}

/// Reconstruct the secret from decoded points using the given strategy
///
/// # Errors
/// Returns the terminal interpolation error; under
/// [`Strategy::ExactThenModular`] only a non-integer exact result triggers the
/// modular attempt
pub fn reconstruct(shares: &ShareSet, points: &[Point], strategy: &Strategy) -> Result<Recovery> {
    let threshold = shares.config().threshold();

    let (secret, mode) = match strategy {
        Strategy::Exact => (
            interpolate::reconstruct_secret(points, threshold, &Mode::Exact)?,
            ModeUsed::Exact,
        ),
        Strategy::Modular { modulus } => (
            interpolate::reconstruct_secret(
                points,
                threshold,
                &Mode::Modular {
                    modulus: modulus.clone(),
                },
            )?,
            ModeUsed::Modular,
        ),
        Strategy::ExactThenModular { modulus } => {
            match interpolate::reconstruct_secret(points, threshold, &Mode::Exact) {
                Ok(secret) => (secret, ModeUsed::Exact),
                Err(err @ Error::NonIntegerResult { .. }) => {
                    warn!(%err, "exact interpolation failed, retrying in prime field");
                    let mode = Mode::Modular {
                        modulus: modulus.clone(),
                    };
                    (
                        interpolate::reconstruct_secret(points, threshold, &mode)?,
                        ModeUsed::Modular,
                    )
                }
                Err(err) => return Err(err.into()),
            }
        }
    };

    info!(%secret, ?mode, "secret reconstructed");

    Ok(Recovery {
        secret: secret.to_string(),
        mode,
        share_count: *shares.config().share_count(),
        threshold: *threshold,
        points: points
            .iter()
            .take(*threshold)
            .map(|p| ReportPoint {
                x: p.x.to_string(),
                y: p.y.to_string(),
            })
            .collect(),
    })
}

/// Reconstruct the secret from a JSON share record
///
/// # Errors
/// Returns an error if the record fails to parse, a share fails to decode, or
/// interpolation fails
pub fn recover_secret(json: &str, strategy: &Strategy) -> Result<Recovery> {
    let shares = ShareSet::from_json(json)?;
    let config = shares.config();
    info!(
        n = *config.share_count(),
        k = *config.threshold(),
        "loaded share record"
    );

    let points = decode_points(&shares)?;
    reconstruct(&shares, &points, strategy).context("Failed to reconstruct secret")
}

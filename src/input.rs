//! JSON share records
//!
//! A share record names the threshold parameters under `keys` and lists each
//! share under its 1-based index:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! `n`, `k` and `base` may be given as JSON integers or as decimal strings.

use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Deserializer};

use crate::domain::{Radix, ShareCount, ShareIndex, Threshold, ThresholdConfig};

/// Integer field that may be written as a number or a decimal string
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(u64),
    Text(String),
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Lenient::deserialize(deserializer)? {
        Lenient::Number(n) => Ok(n),
        Lenient::Text(s) => s
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("'{s}' is not a valid number"))),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawKeys {
    #[serde(deserialize_with = "lenient_u64")]
    n: u64,
    #[serde(deserialize_with = "lenient_u64")]
    k: u64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawShare {
    #[serde(deserialize_with = "lenient_u64")]
    base: u64,
    value: String,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

/// One share as read from the record, not yet decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub index: ShareIndex,
    pub radix: Radix,
    pub value: String,
}

/// A validated share record
///
/// Shares are kept in ascending index order.
#[derive(Debug, Clone)]
pub struct ShareSet {
    config: ThresholdConfig,
    shares: BTreeMap<ShareIndex, Share>,
}

impl ShareSet {
    /// Builds a share set from already validated parts
    ///
    /// # Errors
    /// Returns an error if two shares carry the same index
    pub fn new(config: ThresholdConfig, shares: impl IntoIterator<Item = Share>) -> Result<Self> {
        let mut by_index = BTreeMap::new();
        for share in shares {
            let index = share.index;
            if by_index.insert(index, share).is_some() {
                anyhow::bail!("Share index {index} appears more than once");
            }
        }
        Ok(Self {
            config,
            shares: by_index,
        })
    }

    /// Parses a share record from JSON text
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, a share key is not a positive
    /// integer, a base is outside 2..=36, or `k` and `n` violate `1 <= k <= n`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawRecord = serde_json::from_str(json).context("Failed to parse share record")?;

        let share_count = usize::try_from(raw.keys.n)
            .map_err(|_| anyhow!("Share count {} is too large", raw.keys.n))?;
        let threshold = usize::try_from(raw.keys.k)
            .map_err(|_| anyhow!("Threshold {} is too large", raw.keys.k))?;
        let config = ThresholdConfig::new(
            Threshold::new(threshold).context("Invalid keys.k")?,
            ShareCount::new(share_count).context("Invalid keys.n")?,
        )?;

        let mut shares = Vec::with_capacity(raw.shares.len());
        for (key, raw_share) in raw.shares {
            let index: u64 = key
                .parse()
                .map_err(|_| anyhow!("Share key '{key}' is not a valid index"))?;
            let index = ShareIndex::new(index).with_context(|| format!("Share key '{key}'"))?;
            let base = u32::try_from(raw_share.base).unwrap_or(u32::MAX);
            let radix = Radix::new(base).with_context(|| format!("Share {index}"))?;
            shares.push(Share {
                index,
                radix,
                value: raw_share.value,
            });
        }

        Self::new(config, shares)
    }

    /// Gets the threshold configuration
    #[must_use]
    pub fn config(&self) -> ThresholdConfig {
        self.config
    }

    /// Iterates over all shares in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = &Share> {
        self.shares.values()
    }

    /// Number of shares present in the record
    #[must_use]
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

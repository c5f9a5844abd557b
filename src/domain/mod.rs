//! Domain types for secret reconstruction
//!
//! This module contains validated newtypes for the share record:
//! - [`Radix`] - Numeral base of a share value (2..=36)
//! - [`ShareIndex`] - 1-based share identifier, the x-coordinate
//! - [`Threshold`] - Minimum shares required for reconstruction (k >= 1)
//! - [`ShareCount`] - Total number of shares distributed (n >= 1)
//! - [`ThresholdConfig`] - Validated threshold and share count pair

mod config;
mod radix;
mod share_count;
mod share_index;
mod threshold;

pub use config::ThresholdConfig;
pub use radix::Radix;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;

//! Threshold configuration for a share record

use crate::error::{Error, Result};

use super::{ShareCount, Threshold};

/// Validated pair of threshold and share count
///
/// Enforces the invariant `1 <= k <= n` at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl ThresholdConfig {
    /// Creates a new threshold configuration
    ///
    /// # Errors
    /// Returns [`Error::ThresholdExceedsShareCount`] if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::{ThresholdConfig, Threshold, ShareCount};
    ///
    /// let config = ThresholdConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(4).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 4);
    ///
    /// // Invalid: threshold > share_count
    /// let result = ThresholdConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold > *share_count {
            return Err(Error::ThresholdExceedsShareCount {
                threshold: *threshold,
                share_count: *share_count,
            });
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}

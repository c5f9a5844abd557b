//! `ShareCount` newtype for Shamir Secret Sharing

use crate::error::{Error, Result};

/// Number of shares distributed (n >= 1)
///
/// Only indices `1..=n` of a share record take part in reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(usize);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: usize = 1;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`Error::InvalidShareCount`] if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value < Self::MIN {
            return Err(Error::InvalidShareCount);
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

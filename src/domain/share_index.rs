//! `ShareIndex` newtype for Shamir Secret Sharing

use num_bigint::BigInt;

use crate::error::{Error, Result};

/// Share index, the x-coordinate of a share (1-based)
///
/// Index 0 is never a valid share: the polynomial's value at 0 is the secret itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u64);

impl ShareIndex {
    /// Creates a new share index
    ///
    /// # Errors
    /// Returns [`Error::InvalidShareIndex`] if index is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(6).unwrap();
    /// assert_eq!(*index, 6);
    ///
    /// // Invalid: 0 is where the secret lives
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u64) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidShareIndex);
        }
        Ok(Self(value))
    }

    /// The index as an exact-precision x-coordinate
    #[must_use]
    pub fn to_bigint(self) -> BigInt {
        BigInt::from(self.0)
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u64;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

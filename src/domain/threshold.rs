//! Threshold newtype for Shamir Secret Sharing

use crate::error::{Error, Result};

/// Reconstruction threshold `k`
///
/// Invariant: k >= 1 (enforced at construction).
/// A threshold of 1 describes a constant polynomial: the single share is the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`Error::InvalidThreshold`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidThreshold);
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

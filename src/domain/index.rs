//! Index into the displayed person list.

use super::errors::ValidationError;
use std::fmt;

/// A position in a list.
///
/// Users count from one while the list is addressed from zero; this type
/// holds the zero-based offset and converts at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based)
    }

    /// # Errors
    ///
    /// Returns `ValidationError::ZeroIndex` if `one_based` is zero.
    pub fn from_one_based(one_based: usize) -> Result<Self, ValidationError> {
        one_based
            .checked_sub(1)
            .map(Self)
            .ok_or(ValidationError::ZeroIndex)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

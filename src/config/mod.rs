//! Secret configuration: length and character classes.

mod state;

pub use state::ConfigurationState;

use crate::error::{Error, Result};
use crate::secret::CharClasses;

/// Secret length, always within `Length::MIN..=Length::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Length(usize);

impl Length {
    pub const MIN: usize = 4;
    pub const MAX: usize = 50;

    pub fn new(value: usize) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Length(value))
        } else {
            Err(Error::LengthOutOfRange(value))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Move by `delta`, stopping at the bounds.
    pub fn step(self, delta: isize) -> Self {
        let moved = self.0.saturating_add_signed(delta);
        Length(moved.clamp(Self::MIN, Self::MAX))
    }

    pub fn min() -> Self {
        Length(Self::MIN)
    }

    pub fn max() -> Self {
        Length(Self::MAX)
    }
}

impl Default for Length {
    fn default() -> Self {
        Length(8)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Configuration {
    pub length: Length,
    pub classes: CharClasses,
}

//! Disc representation.
//!
//! A disc is identified by its size, an integer in `[1, N]` where `1` is
//! the smallest. Sizes are unique within a game, so a disc's identity is
//! its size; discs are not separately tracked objects.

use serde::{Deserialize, Serialize};

/// A disc, identified by its size (1 = smallest).
///
/// Ordering follows size, so the top of a well-formed stack is its
/// minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disc(pub u8);

impl Disc {
    /// Create a disc of the given size.
    #[must_use]
    pub const fn new(size: u8) -> Self {
        Self(size)
    }

    /// Get the disc's size.
    #[must_use]
    pub const fn size(self) -> u8 {
        self.0
    }

    /// Whether this disc may rest directly on `below`.
    ///
    /// Only a strictly smaller disc may sit on top of another.
    #[must_use]
    pub const fn fits_on(self, below: Disc) -> bool {
        self.0 < below.0
    }
}

impl std::fmt::Display for Disc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disc({})", self.0)
    }
}

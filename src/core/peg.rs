//! Peg identification.
//!
//! The puzzle has exactly three pegs and no peg can be added or removed.
//! `PegId` is a fieldless enum, so an out-of-range peg is unrepresentable
//! once inside the engine; the fallible conversions at the boundary answer
//! `EngineError::InvalidInput` for anything else.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// One of the three fixed pegs.
///
/// Peg `A` is the start peg holding the full tower when a game begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PegId {
    A,
    B,
    C,
}

impl PegId {
    /// Iterate over all three pegs in order.
    ///
    /// ```
    /// use hanoi_engine::PegId;
    ///
    /// let pegs: Vec<_> = PegId::all().collect();
    /// assert_eq!(pegs, [PegId::A, PegId::B, PegId::C]);
    /// ```
    pub fn all() -> impl Iterator<Item = PegId> {
        [PegId::A, PegId::B, PegId::C].into_iter()
    }

    /// Get the peg's 0-based index (A=0, B=1, C=2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PegId::A => 0,
            PegId::B => 1,
            PegId::C => 2,
        }
    }

    /// Convert a 0-based index into a peg.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for indices outside `0..3`.
    pub fn from_index(index: usize) -> Result<Self, EngineError> {
        match index {
            0 => Ok(PegId::A),
            1 => Ok(PegId::B),
            2 => Ok(PegId::C),
            _ => Err(EngineError::InvalidInput),
        }
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PegId::A => write!(f, "Peg A"),
            PegId::B => write!(f, "Peg B"),
            PegId::C => write!(f, "Peg C"),
        }
    }
}

impl std::str::FromStr for PegId {
    type Err = EngineError;

    /// Parse a peg label (`"A"`, `"b"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(PegId::A),
            "B" | "b" => Ok(PegId::B),
            "C" | "c" => Ok(PegId::C),
            _ => Err(EngineError::InvalidInput),
        }
    }
}

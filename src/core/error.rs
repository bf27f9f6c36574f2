//! Error taxonomy.
//!
//! Every failure mode is a programmer-contract violation; there are no IO
//! or transient errors. A rejected move is a normal
//! [`MoveOutcome`](crate::engine::MoveOutcome), never an error, so illegal
//! play cannot throw or halt interaction.

use super::config::{MAX_DISC_COUNT, MIN_DISC_COUNT};

/// Errors surfaced at the engine boundary.
///
/// Neither variant should ever reach the end user: disc-count controls
/// clamp at the boundaries and peg inputs come from a fixed set of three,
/// so seeing one of these indicates a caller bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Disc count outside the supported range.
    InvalidConfiguration {
        /// The rejected disc count.
        disc_count: u8,
    },
    /// Peg identifier outside the fixed set of three.
    InvalidInput,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidConfiguration { disc_count } => write!(
                f,
                "disc count {disc_count} outside supported range {MIN_DISC_COUNT}..={MAX_DISC_COUNT}"
            ),
            EngineError::InvalidInput => {
                write!(f, "peg identifier outside the fixed set of three")
            }
        }
    }
}

impl std::error::Error for EngineError {}

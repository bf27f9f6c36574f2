//! Core puzzle types: pegs, discs, state, configuration, errors.
//!
//! These are the building blocks the engine operates on. Move legality
//! and state transitions live in [`crate::engine`]; the types here only
//! maintain their own invariants.

pub mod config;
pub mod disc;
pub mod error;
pub mod peg;
pub mod state;

pub use config::{EngineConfig, PostWinInput, MAX_DISC_COUNT, MIN_DISC_COUNT};
pub use disc::Disc;
pub use error::EngineError;
pub use peg::PegId;
pub use state::{PegStack, PuzzleState};

pub(crate) use config::validate_disc_count;

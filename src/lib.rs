//! # hanoi-engine
//!
//! The rules engine for an interactive three-peg Tower of Hanoi puzzle.
//!
//! The player acts by selecting pegs: the first selection lifts a peg's
//! top disc, the second either cancels (same peg), completes a transfer
//! (legal target), or is rejected by the stacking rule (illegal target).
//! The engine owns the puzzle state, validates every move, detects
//! completion, and scores the finished game against the theoretical
//! minimum of `2^N - 1` moves.
//!
//! ## Design Principles
//!
//! 1. **Engine-only**: rendering, dialogs, sound playback, and confetti
//!    live outside the crate. [`select_peg`](HanoiEngine::select_peg)
//!    answers with a [`MoveOutcome`] that collaborators map to animations
//!    and tones; [`feedback`] provides the pure data those layers key on.
//!
//! 2. **Single owned state**: the engine exclusively owns one
//!    [`PuzzleState`], mutated only through `select_peg` and the
//!    initialization operations. Everything is synchronous; no locking.
//!
//! 3. **Invalid input is unrepresentable or an error**: pegs are a
//!    three-variant enum, and disc counts outside `3..=7` are
//!    [`EngineError::InvalidConfiguration`].
//!
//! ## Modules
//!
//! - `core`: peg and disc identifiers, puzzle state, configuration, errors
//! - `engine`: the `HanoiEngine` state machine, outcomes, scoring
//! - `feedback`: tone frequencies and score grades for collaborators
//!
//! ## Example
//!
//! ```
//! use hanoi_engine::{EngineConfig, HanoiEngine, MoveOutcome, PegId};
//!
//! let mut engine = HanoiEngine::new(EngineConfig::new(3))?;
//!
//! // Lift the smallest disc off the start peg and drop it on peg C.
//! engine.select_peg(PegId::A);
//! let outcome = engine.select_peg(PegId::C);
//!
//! assert!(matches!(outcome, MoveOutcome::Moved { .. }));
//! assert_eq!(engine.state().move_count(), 1);
//! # Ok::<(), hanoi_engine::EngineError>(())
//! ```

pub mod core;
pub mod engine;
pub mod feedback;

pub use crate::core::{
    Disc, EngineConfig, EngineError, PegId, PostWinInput, PuzzleState, MAX_DISC_COUNT,
    MIN_DISC_COUNT,
};
pub use crate::engine::{DiscCountChange, HanoiEngine, MoveOutcome};
pub use crate::feedback::{disc_tone, ScoreGrade, BASE_FREQUENCY, TONE_DURATION_MS};

//! The Hanoi engine: move validation, state transitions, completion, and
//! scoring.
//!
//! The engine owns the single [`PuzzleState`] instance. All mutation goes
//! through [`HanoiEngine::select_peg`] and the initialization operations;
//! every operation is synchronous and runs to completion in response to
//! one input event before the next is accepted.

pub mod outcome;
pub mod score;

pub use outcome::MoveOutcome;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{
    validate_disc_count, EngineConfig, EngineError, PegId, PostWinInput, PuzzleState,
    MAX_DISC_COUNT, MIN_DISC_COUNT,
};

/// Decision for a requested disc-count change.
///
/// Consumed by the external confirmation flow: when
/// `requires_confirmation` is set the engine has deferred the change, and
/// the caller re-initializes itself once the player confirms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscCountChange {
    /// The requested count stays within the supported range.
    pub allowed: bool,

    /// Applying the change now would discard in-progress state.
    pub requires_confirmation: bool,
}

/// The puzzle state machine and move-validation engine.
///
/// ## Selection model
///
/// A game is played through [`select_peg`](Self::select_peg) alone: the
/// first selection lifts a peg's top disc, the second either cancels
/// (same peg), completes a transfer (legal target), or is rejected by the
/// stacking rule (illegal target, lift preserved).
#[derive(Clone, Debug)]
pub struct HanoiEngine {
    config: EngineConfig,
    state: PuzzleState,
}

impl HanoiEngine {
    /// Create an engine with the given configuration.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfiguration`] if the configured disc count
    /// is outside `[MIN_DISC_COUNT, MAX_DISC_COUNT]`.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            state: PuzzleState::new(config.disc_count),
            config,
        })
    }

    /// Start a fresh game with `disc_count` discs.
    ///
    /// Replaces the state wholesale: all discs on peg A, nothing lifted,
    /// move counter at zero. No other side effects.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfiguration`] if `disc_count` is outside
    /// `[MIN_DISC_COUNT, MAX_DISC_COUNT]`; the current game is untouched.
    #[instrument(skip(self))]
    pub fn initialize(&mut self, disc_count: u8) -> Result<(), EngineError> {
        validate_disc_count(disc_count)?;
        self.config.disc_count = disc_count;
        self.state = PuzzleState::new(disc_count);
        Ok(())
    }

    /// Restart the current game at the same disc count.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = PuzzleState::new(self.config.disc_count);
    }

    /// Whether resetting or reconfiguring now would discard progress.
    ///
    /// True once any move has been made and the puzzle is not yet solved.
    /// The external confirmation flow prompts exactly when this is true.
    #[must_use]
    pub fn requires_confirmation(&self) -> bool {
        self.state.move_count() > 0 && !self.state.is_solved()
    }

    /// Handle a peg selection, the single user-facing action.
    ///
    /// Branches, evaluated in order:
    /// 1. Puzzle already solved: the final state is immutable; the
    ///    configured [`PostWinInput`] picks the reported outcome.
    /// 2. Nothing lifted: lift the target's top disc, or ignore an empty
    ///    peg.
    /// 3. Target equals the lifted peg: cancel, putting the disc back.
    /// 4. Otherwise: attempt the transfer. A disc larger than the
    ///    target's top is rejected and the lift survives; a legal drop
    ///    completes the move and advances the counter.
    #[instrument(skip(self), fields(peg = %peg, lifted = ?self.state.lifted()))]
    pub fn select_peg(&mut self, peg: PegId) -> MoveOutcome {
        if self.state.is_solved() {
            return match self.config.post_win_input {
                PostWinInput::Report => MoveOutcome::GameOver,
                PostWinInput::Ignore => MoveOutcome::Ignored,
            };
        }

        let Some(origin) = self.state.lifted() else {
            return match self.state.top_disc(peg) {
                Some(disc) => {
                    self.state.set_lifted(Some(peg));
                    MoveOutcome::Lifted { peg, disc }
                }
                None => MoveOutcome::Ignored,
            };
        };

        let disc = self
            .state
            .top_disc(origin)
            .expect("lifted peg is never empty");

        if origin == peg {
            self.state.set_lifted(None);
            return MoveOutcome::Cancelled { peg, disc };
        }

        if let Some(target_top) = self.state.top_disc(peg) {
            if !disc.fits_on(target_top) {
                // The lift survives a rejection so the player can retry
                // against another peg without re-lifting.
                return MoveOutcome::Rejected { peg, disc };
            }
        }

        self.state.transfer_top(origin, peg);
        self.state.set_lifted(None);
        tracing::debug!(
            %disc,
            from = %origin,
            to = %peg,
            moves = self.state.move_count(),
            "disc moved"
        );
        MoveOutcome::Moved {
            from: origin,
            to: peg,
            disc,
        }
    }

    /// All discs moved off the start peg and consolidated onto a single
    /// other peg.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Score for the finished game, `None` while unsolved.
    ///
    /// Optimal play scores exactly 100; see [`score`](crate::engine::score)
    /// for the curve.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.is_solved()
            .then(|| score::score_for_moves(self.state.move_count(), self.state.disc_count()))
    }

    /// Theoretical minimum moves for the current disc count.
    #[must_use]
    pub fn min_steps(&self) -> u32 {
        score::min_steps(self.state.disc_count())
    }

    /// Probe a disc-count change without applying it.
    ///
    /// `allowed` reports whether the new count stays in
    /// `[MIN_DISC_COUNT, MAX_DISC_COUNT]`; `requires_confirmation`
    /// whether an allowed change would discard in-progress state.
    #[must_use]
    pub fn can_change_disc_count(&self, delta: i8) -> DiscCountChange {
        let new_count = i16::from(self.state.disc_count()) + i16::from(delta);
        let allowed =
            (i16::from(MIN_DISC_COUNT)..=i16::from(MAX_DISC_COUNT)).contains(&new_count);

        DiscCountChange {
            allowed,
            requires_confirmation: allowed && self.requires_confirmation(),
        }
    }

    /// Request a disc-count change, applying it when nothing is lost.
    ///
    /// When the change is allowed and no confirmation is needed the
    /// engine starts a fresh game at the new count directly. When
    /// confirmation is required the state is left untouched; the caller
    /// prompts externally and then invokes
    /// [`initialize`](Self::initialize) itself.
    #[instrument(skip(self))]
    pub fn request_disc_count_change(&mut self, delta: i8) -> DiscCountChange {
        let decision = self.can_change_disc_count(delta);
        if decision.allowed && !decision.requires_confirmation {
            let new_count = (i16::from(self.state.disc_count()) + i16::from(delta)) as u8;
            self.config.disc_count = new_count;
            self.state = PuzzleState::new(new_count);
        }
        decision
    }

    /// Read-only state snapshot for rendering.
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether selecting a peg can currently have an effect.
    ///
    /// False once solved. While a disc is lifted every peg is selectable
    /// (cancel, drop, or rejection); otherwise only non-empty pegs are.
    #[must_use]
    pub fn can_select(&self, peg: PegId) -> bool {
        if self.state.is_solved() {
            return false;
        }
        self.state.lifted().is_some() || !self.state.is_empty(peg)
    }
}

impl Default for HanoiEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default()).expect("default config is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Disc;

    fn engine(disc_count: u8) -> HanoiEngine {
        HanoiEngine::new(EngineConfig::new(disc_count)).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_disc_count() {
        assert_eq!(
            HanoiEngine::new(EngineConfig::new(2)).err(),
            Some(EngineError::InvalidConfiguration { disc_count: 2 })
        );
        assert_eq!(
            HanoiEngine::new(EngineConfig::new(8)).err(),
            Some(EngineError::InvalidConfiguration { disc_count: 8 })
        );
    }

    #[test]
    fn test_lift_and_cancel() {
        let mut engine = engine(3);

        let lifted = engine.select_peg(PegId::A);
        assert_eq!(
            lifted,
            MoveOutcome::Lifted {
                peg: PegId::A,
                disc: Disc::new(1)
            }
        );
        assert_eq!(engine.state().lifted(), Some(PegId::A));

        let cancelled = engine.select_peg(PegId::A);
        assert_eq!(
            cancelled,
            MoveOutcome::Cancelled {
                peg: PegId::A,
                disc: Disc::new(1)
            }
        );
        assert_eq!(engine.state().lifted(), None);
        assert_eq!(engine.state().move_count(), 0);
    }

    #[test]
    fn test_empty_peg_selection_is_ignored() {
        let mut engine = engine(3);
        assert_eq!(engine.select_peg(PegId::B), MoveOutcome::Ignored);
        assert_eq!(engine.state().lifted(), None);
    }

    #[test]
    fn test_legal_move_advances_counter() {
        let mut engine = engine(3);

        engine.select_peg(PegId::A);
        let moved = engine.select_peg(PegId::C);

        assert_eq!(
            moved,
            MoveOutcome::Moved {
                from: PegId::A,
                to: PegId::C,
                disc: Disc::new(1)
            }
        );
        assert_eq!(engine.state().move_count(), 1);
        assert_eq!(engine.state().lifted(), None);
    }

    #[test]
    fn test_rejection_preserves_lift() {
        let mut engine = engine(3);

        // Disc 1 to C, then lift disc 2 and try to drop it on disc 1.
        engine.select_peg(PegId::A);
        engine.select_peg(PegId::C);
        engine.select_peg(PegId::A);

        let rejected = engine.select_peg(PegId::C);
        assert_eq!(
            rejected,
            MoveOutcome::Rejected {
                peg: PegId::C,
                disc: Disc::new(2)
            }
        );
        assert_eq!(engine.state().lifted(), Some(PegId::A));
        assert_eq!(engine.state().move_count(), 1);

        // Retry against B without re-lifting.
        let moved = engine.select_peg(PegId::B);
        assert!(moved.is_move());
    }

    #[test]
    fn test_drop_on_empty_peg_is_legal() {
        let mut engine = engine(3);

        engine.select_peg(PegId::A);
        let moved = engine.select_peg(PegId::B);
        assert!(moved.is_move());
        assert_eq!(engine.state().top_disc(PegId::B), Some(Disc::new(1)));
    }

    #[test]
    fn test_min_steps_tracks_disc_count() {
        assert_eq!(engine(3).min_steps(), 7);
        assert_eq!(engine(7).min_steps(), 127);
    }

    #[test]
    fn test_score_is_none_until_solved() {
        let mut engine = engine(3);
        assert_eq!(engine.score(), None);

        engine.select_peg(PegId::A);
        engine.select_peg(PegId::C);
        assert_eq!(engine.score(), None);
    }

    #[test]
    fn test_can_select() {
        let mut engine = engine(3);

        assert!(engine.can_select(PegId::A));
        assert!(!engine.can_select(PegId::B));
        assert!(!engine.can_select(PegId::C));

        // Everything is selectable while a disc is in hand.
        engine.select_peg(PegId::A);
        for peg in PegId::all() {
            assert!(engine.can_select(peg));
        }
    }

    #[test]
    fn test_default_engine() {
        let engine = HanoiEngine::default();
        assert_eq!(engine.state().disc_count(), 5);
        assert!(!engine.is_solved());
    }
}

//! Outcomes produced by peg selection.
//!
//! Every call to [`HanoiEngine::select_peg`](super::HanoiEngine::select_peg)
//! answers with exactly one outcome. Collaborators map outcomes to
//! effects: the audio layer picks a tone from the disc size (see
//! [`crate::feedback::disc_tone`]), the presentation layer animates the
//! lift, drop, or rejection.

use serde::{Deserialize, Serialize};

use crate::core::{Disc, PegId};

/// Result of a single peg selection.
///
/// Only `Moved` advances the move counter. `Rejected` is a normal game
/// event, not an error; it signals "try again" without halting
/// interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The top disc of `peg` was lifted and is now in hand.
    Lifted { peg: PegId, disc: Disc },

    /// The lifted disc was put back down on its own peg.
    Cancelled { peg: PegId, disc: Disc },

    /// The lifted disc does not fit on `peg`. The lift is preserved so
    /// the player can immediately retry against another peg.
    Rejected { peg: PegId, disc: Disc },

    /// A completed transfer of `disc` from `from` to `to`.
    Moved { from: PegId, to: PegId, disc: Disc },

    /// The selection had no effect (an empty peg with nothing lifted).
    Ignored,

    /// The puzzle is already solved; the final state is immutable.
    GameOver,
}

impl MoveOutcome {
    /// The disc involved, if any.
    ///
    /// This is what the audio layer keys its tone on.
    #[must_use]
    pub fn disc(&self) -> Option<Disc> {
        match *self {
            MoveOutcome::Lifted { disc, .. }
            | MoveOutcome::Cancelled { disc, .. }
            | MoveOutcome::Rejected { disc, .. }
            | MoveOutcome::Moved { disc, .. } => Some(disc),
            MoveOutcome::Ignored | MoveOutcome::GameOver => None,
        }
    }

    /// Whether this outcome completed a move and advanced the counter.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_payloads() {
        let lifted = MoveOutcome::Lifted {
            peg: PegId::A,
            disc: Disc::new(1),
        };
        assert_eq!(lifted.disc(), Some(Disc::new(1)));

        let moved = MoveOutcome::Moved {
            from: PegId::A,
            to: PegId::C,
            disc: Disc::new(2),
        };
        assert_eq!(moved.disc(), Some(Disc::new(2)));

        assert_eq!(MoveOutcome::Ignored.disc(), None);
        assert_eq!(MoveOutcome::GameOver.disc(), None);
    }

    #[test]
    fn test_only_moved_is_a_move() {
        let moved = MoveOutcome::Moved {
            from: PegId::B,
            to: PegId::C,
            disc: Disc::new(1),
        };
        assert!(moved.is_move());

        let rejected = MoveOutcome::Rejected {
            peg: PegId::C,
            disc: Disc::new(3),
        };
        assert!(!rejected.is_move());
        assert!(!MoveOutcome::Ignored.is_move());
    }

    #[test]
    fn test_serialization() {
        let outcome = MoveOutcome::Moved {
            from: PegId::A,
            to: PegId::B,
            disc: Disc::new(4),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: MoveOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}

//! Puzzle state: disc stacks, lift selection, move counter.
//!
//! ## Representation
//!
//! Each peg holds its discs as a stack, bottom to top, strictly decreasing
//! in size. The top disc is therefore the last element and the smallest on
//! the peg. A stack never exceeds `MAX_DISC_COUNT` entries, so it lives in
//! a `SmallVec` without heap allocation.
//!
//! ## Invariants
//!
//! - The three stacks together hold each of `1..=disc_count` exactly once.
//! - If `lifted` is set, the referenced peg is non-empty.
//! - `move_count` only grows, except through wholesale replacement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::MAX_DISC_COUNT;
use super::disc::Disc;
use super::peg::PegId;

/// A single peg's discs, bottom to top.
pub type PegStack = SmallVec<[Disc; MAX_DISC_COUNT as usize]>;

/// Complete puzzle state.
///
/// Created fresh for a chosen disc count, mutated in place by accepted
/// moves, and replaced wholesale on reset or disc-count change, never
/// partially migrated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    /// Disc stacks indexed by `PegId::index()`.
    pegs: [PegStack; 3],

    /// Number of discs in play. Fixed for the duration of a game.
    disc_count: u8,

    /// Peg whose top disc is currently lifted, if any.
    lifted: Option<PegId>,

    /// Completed moves this game.
    move_count: u32,
}

impl PuzzleState {
    /// Create the starting position: discs `N..1` stacked on peg A.
    #[must_use]
    pub fn new(disc_count: u8) -> Self {
        let mut start = PegStack::new();
        for size in (1..=disc_count).rev() {
            start.push(Disc::new(size));
        }

        Self {
            pegs: [start, PegStack::new(), PegStack::new()],
            disc_count,
            lifted: None,
            move_count: 0,
        }
    }

    /// Discs on a peg, bottom to top.
    #[must_use]
    pub fn peg(&self, peg: PegId) -> &[Disc] {
        &self.pegs[peg.index()]
    }

    /// The top (smallest) disc of a peg, `None` when empty.
    #[must_use]
    pub fn top_disc(&self, peg: PegId) -> Option<Disc> {
        self.pegs[peg.index()].last().copied()
    }

    /// Whether a peg holds no discs.
    #[must_use]
    pub fn is_empty(&self, peg: PegId) -> bool {
        self.pegs[peg.index()].is_empty()
    }

    /// Number of discs in play.
    #[must_use]
    pub fn disc_count(&self) -> u8 {
        self.disc_count
    }

    /// Peg whose top disc is currently lifted, if any.
    #[must_use]
    pub fn lifted(&self) -> Option<PegId> {
        self.lifted
    }

    /// Completed moves this game.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// All discs moved off the start peg and consolidated onto a single
    /// other peg.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_empty(PegId::A) && (self.is_empty(PegId::B) || self.is_empty(PegId::C))
    }

    pub(crate) fn set_lifted(&mut self, lifted: Option<PegId>) {
        debug_assert!(
            lifted.map_or(true, |peg| !self.is_empty(peg)),
            "lifted peg must be non-empty"
        );
        self.lifted = lifted;
    }

    /// Transfer the top disc of `from` onto `to` and count the move.
    ///
    /// Legality is the caller's responsibility; debug builds assert the
    /// stacking rule.
    pub(crate) fn transfer_top(&mut self, from: PegId, to: PegId) -> Disc {
        let disc = self.pegs[from.index()]
            .pop()
            .expect("transfer from an empty peg");
        debug_assert!(
            self.top_disc(to).map_or(true, |below| disc.fits_on(below)),
            "larger disc placed on smaller"
        );
        self.pegs[to.index()].push(disc);
        self.move_count += 1;
        disc
    }

    /// Every stack is strictly decreasing bottom to top and the stacks
    /// together hold each of `1..=disc_count` exactly once.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = [false; MAX_DISC_COUNT as usize + 1];
        let mut total = 0usize;

        for peg in PegId::all() {
            let stack = self.peg(peg);
            for pair in stack.windows(2) {
                if !pair[1].fits_on(pair[0]) {
                    return false;
                }
            }
            for disc in stack {
                let size = disc.size() as usize;
                if size == 0 || size > self.disc_count as usize || seen[size] {
                    return false;
                }
                seen[size] = true;
                total += 1;
            }
        }

        total == self.disc_count as usize
            && self.lifted.map_or(true, |peg| !self.is_empty(peg))
    }
}

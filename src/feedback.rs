//! Presentation-feedback data for external collaborators.
//!
//! The engine knows nothing about sound or visuals. These mappings hand
//! the audio and dialog layers the numbers they key their effects on: a
//! tone frequency per disc, and a qualitative grade per final score.

use serde::{Deserialize, Serialize};

use crate::core::Disc;

/// Oscillator reference frequency in Hz.
pub const BASE_FREQUENCY: f64 = 250.0;

/// How long a move tone plays, in milliseconds.
pub const TONE_DURATION_MS: u64 = 200;

/// Tone frequency in Hz for a disc. Larger discs sound lower.
///
/// `250 * 3^(1/4) / size^(1/4)`; a size-3 disc lands exactly on the
/// reference frequency.
#[must_use]
pub fn disc_tone(disc: Disc) -> f64 {
    BASE_FREQUENCY * 3f64.powf(0.25) / f64::from(disc.size()).powf(0.25)
}

/// Qualitative rating band for a final score.
///
/// Bands partition the score range `(60, 100]`; only the optimal solve
/// earns `Perfect`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreGrade {
    /// Exactly 100: the optimal solve.
    Perfect,
    /// Above 95.
    Excellent,
    /// Above 90.
    Great,
    /// Above 80.
    Good,
    /// Above 70.
    Fair,
    /// The low end of the curve, approaching the floor of 60.
    Poor,
}

impl ScoreGrade {
    /// Band for a final score.
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score == 100.0 {
            ScoreGrade::Perfect
        } else if score > 95.0 {
            ScoreGrade::Excellent
        } else if score > 90.0 {
            ScoreGrade::Great
        } else if score > 80.0 {
            ScoreGrade::Good
        } else if score > 70.0 {
            ScoreGrade::Fair
        } else {
            ScoreGrade::Poor
        }
    }
}

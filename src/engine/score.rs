//! Scoring.
//!
//! The score compares the player's move count against the theoretical
//! minimum of `2^N - 1` moves and decays exponentially toward a floor:
//!
//! `score = 60 + 40 * e^(1.5 * (1 - moves / min_steps))`
//!
//! Optimal play scores exactly 100. Every legal solve takes at least
//! `min_steps` moves, so the ratio is always >= 1 and the score is
//! bounded in `(60, 100]`; it approaches 60 asymptotically but never
//! reaches it for a finite move count.

/// Theoretical minimum number of moves for an `n`-disc tower.
#[must_use]
pub fn min_steps(disc_count: u8) -> u32 {
    (1u32 << disc_count) - 1
}

/// Score for a finished game with the given move count.
#[must_use]
pub fn score_for_moves(move_count: u32, disc_count: u8) -> f64 {
    let ratio = f64::from(move_count) / f64::from(min_steps(disc_count));
    60.0 + 40.0 * (1.5 * (1.0 - ratio)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_steps() {
        assert_eq!(min_steps(3), 7);
        assert_eq!(min_steps(4), 15);
        assert_eq!(min_steps(5), 31);
        assert_eq!(min_steps(6), 63);
        assert_eq!(min_steps(7), 127);
    }

    #[test]
    fn test_optimal_play_scores_exactly_100() {
        for disc_count in 3..=7 {
            assert_eq!(score_for_moves(min_steps(disc_count), disc_count), 100.0);
        }
    }

    #[test]
    fn test_score_curve() {
        // ratio 1.2 -> ~90, ratio 2 -> ~69, per the curve's shape.
        let at_ratio = |ratio: f64| 60.0 + 40.0 * (1.5 * (1.0 - ratio)).exp();

        assert!((at_ratio(1.2) - 89.63).abs() < 0.01);
        assert!((at_ratio(2.0) - 68.93).abs() < 0.01);
    }

    #[test]
    fn test_score_never_reaches_floor() {
        // 10x the minimum is dreadful play but still strictly above 60.
        let score = score_for_moves(min_steps(7) * 10, 7);
        assert!(score > 60.0);
        assert!(score < 61.0);
    }

    #[test]
    fn test_score_decreases_with_more_moves() {
        let optimal = score_for_moves(7, 3);
        let sloppy = score_for_moves(11, 3);
        let dreadful = score_for_moves(25, 3);

        assert!(optimal > sloppy);
        assert!(sloppy > dreadful);
    }
}

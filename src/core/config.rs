//! Engine configuration.
//!
//! The engine is configured at startup with a disc count and the post-win
//! input policy. Changing the disc count mid-game goes through
//! [`HanoiEngine::request_disc_count_change`](crate::engine::HanoiEngine::request_disc_count_change)
//! so in-progress state is never silently discarded.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Smallest supported tower.
pub const MIN_DISC_COUNT: u8 = 3;

/// Largest supported tower.
pub const MAX_DISC_COUNT: u8 = 7;

/// How `select_peg` answers once the puzzle is solved.
///
/// The final state is immutable either way; the policy only picks the
/// outcome reported to presentation layers that keep pegs clickable after
/// a win.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostWinInput {
    /// Answer [`MoveOutcome::GameOver`](crate::engine::MoveOutcome::GameOver).
    #[default]
    Report,
    /// Answer [`MoveOutcome::Ignored`](crate::engine::MoveOutcome::Ignored).
    Ignore,
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of discs for new games, in
    /// `[MIN_DISC_COUNT, MAX_DISC_COUNT]`.
    pub disc_count: u8,

    /// Selection behavior after the puzzle is solved.
    pub post_win_input: PostWinInput,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            disc_count: 5,
            post_win_input: PostWinInput::default(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration for the given disc count.
    #[must_use]
    pub fn new(disc_count: u8) -> Self {
        Self {
            disc_count,
            ..Self::default()
        }
    }

    /// Create a config with a custom disc count.
    #[must_use]
    pub fn with_disc_count(mut self, disc_count: u8) -> Self {
        self.disc_count = disc_count;
        self
    }

    /// Create a config with a custom post-win input policy.
    #[must_use]
    pub fn with_post_win_input(mut self, policy: PostWinInput) -> Self {
        self.post_win_input = policy;
        self
    }

    /// Check the configured disc count against the supported range.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfiguration`] when outside
    /// `[MIN_DISC_COUNT, MAX_DISC_COUNT]`.
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_disc_count(self.disc_count)
    }
}

/// Check a disc count against the supported range.
pub(crate) fn validate_disc_count(disc_count: u8) -> Result<(), EngineError> {
    if (MIN_DISC_COUNT..=MAX_DISC_COUNT).contains(&disc_count) {
        Ok(())
    } else {
        Err(EngineError::InvalidConfiguration { disc_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_range_boundaries() {
        assert!(EngineConfig::new(MIN_DISC_COUNT).validate().is_ok());
        assert!(EngineConfig::new(MAX_DISC_COUNT).validate().is_ok());

        assert_eq!(
            EngineConfig::new(2).validate(),
            Err(EngineError::InvalidConfiguration { disc_count: 2 })
        );
        assert_eq!(
            EngineConfig::new(8).validate(),
            Err(EngineError::InvalidConfiguration { disc_count: 8 })
        );
        assert_eq!(
            EngineConfig::new(0).validate(),
            Err(EngineError::InvalidConfiguration { disc_count: 0 })
        );
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_disc_count(4)
            .with_post_win_input(PostWinInput::Ignore);

        assert_eq!(config.disc_count, 4);
        assert_eq!(config.post_win_input, PostWinInput::Ignore);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::new(6);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

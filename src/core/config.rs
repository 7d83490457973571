//! Table constants and engine configuration.
//!
//! `GameConfig` is built once and handed to the engine. The table shape
//! (five players, eight cards each) is fixed by the game and lives in the
//! constants below rather than in the config.

use serde::{Deserialize, Serialize};

/// Players at the table.
pub const NUM_PLAYERS: usize = 5;

/// Cards dealt to each player.
pub const HAND_SIZE: usize = 8;

/// Tricks in a hand; each player plays one card per trick.
pub const NUM_TRICKS: usize = HAND_SIZE;

/// Cards in the deck.
pub const DECK_SIZE: usize = NUM_PLAYERS * HAND_SIZE;

/// Card points available in one hand.
pub const TOTAL_POINTS: u32 = 120;

/// What the engine does when every player passes without a rank bid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllPassPolicy {
    /// Reshuffle from the engine RNG, deal again, draw a new first player
    /// and restart the auction.
    #[default]
    Redeal,
    /// The first player of the hand is forced to call at the lowest rank.
    ForcedCall,
}

/// Engine configuration.
///
/// ```
/// use briscola_chiamata::core::{AllPassPolicy, GameConfig};
///
/// let config = GameConfig::new(7).with_all_pass_policy(AllPassPolicy::ForcedCall);
/// assert_eq!(config.seed, 7);
/// assert!(config.enforce_turn);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the initial deal.
    pub seed: u64,

    /// Resolution of an auction where nobody bids a rank.
    pub all_pass_policy: AllPassPolicy,

    /// Reject actions submitted on behalf of a seat other than the current player.
    pub enforce_turn: bool,
}

impl GameConfig {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            all_pass_policy: AllPassPolicy::default(),
            enforce_turn: true,
        }
    }

    #[must_use]
    pub fn with_all_pass_policy(mut self, policy: AllPassPolicy) -> Self {
        self.all_pass_policy = policy;
        self
    }

    #[must_use]
    pub fn with_enforce_turn(mut self, enforce: bool) -> Self {
        self.enforce_turn = enforce;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_constants() {
        assert_eq!(DECK_SIZE, 40);
        assert_eq!(NUM_TRICKS, 8);
    }

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 0);
        assert_eq!(config.all_pass_policy, AllPassPolicy::Redeal);
        assert!(config.enforce_turn);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new(99)
            .with_all_pass_policy(AllPassPolicy::ForcedCall)
            .with_enforce_turn(false);

        assert_eq!(config.seed, 99);
        assert_eq!(config.all_pass_policy, AllPassPolicy::ForcedCall);
        assert!(!config.enforce_turn);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new(5).with_all_pass_policy(AllPassPolicy::ForcedCall);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}

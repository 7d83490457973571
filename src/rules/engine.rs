//! Rules engine trait consumed by agents and environment adapters.
//!
//! Adapters drive a hand purely through this surface:
//! - Who acts next
//! - Which actions are legal (as values or as a mask)
//! - Applying an action
//! - The final result

use crate::cards::Suit;
use crate::core::config::DECK_SIZE;
use crate::core::{ActionError, ActionKind, Bid, GameAction, GameConfig, Phase, PlayerId};

use super::scoring::GameResult;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec once the hand is over
/// - `apply_action`: Must be deterministic and leave state untouched on `Err`
/// - `is_terminal`: Return None while the hand continues
pub trait RulesEngine {
    /// Get the engine configuration.
    fn config(&self) -> &GameConfig;

    /// Current phase of the hand.
    fn phase(&self) -> Phase;

    /// Seat expected to act, `None` once the hand is over.
    fn to_act(&self) -> Option<PlayerId>;

    /// Every action the current player may legally take.
    fn legal_actions(&self) -> Vec<GameAction>;

    /// Apply an action on behalf of the current player.
    fn apply_action(&mut self, action: GameAction) -> Result<(), ActionError>;

    /// Final result, `None` while the hand continues.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check a single action without applying it.
    fn is_legal(&self, action: GameAction) -> bool {
        self.legal_actions().contains(&action)
    }

    /// Legality mask over the current phase's action space.
    ///
    /// Entry `i` is true when the action encoded as `i` is legal. The mask is
    /// 11 wide while bidding, 4 while declaring trump, 40 during tricks and
    /// empty once the hand is over.
    fn legal_action_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; action_space_size(self.phase())];
        for action in self.legal_actions() {
            if let Some(slot) = action.encode().and_then(|i| mask.get_mut(i as usize)) {
                *slot = true;
            }
        }
        mask
    }
}

/// Width of the encoded action space for a phase.
#[must_use]
pub fn action_space_size(phase: Phase) -> usize {
    match phase.expected_action() {
        Some(ActionKind::Bid) => Bid::COUNT,
        Some(ActionKind::Suit) => Suit::COUNT,
        Some(ActionKind::Card) => DECK_SIZE,
        None => 0,
    }
}

//! Trump declaration by the caller.
//!
//! Naming the trump suit also fixes the partner card: the called rank in
//! the trump suit. Whoever plays it becomes the caller's partner.

use tracing::info;

use super::game::BriscolaGame;
use crate::cards::{Card, Suit};
use crate::core::{ActionError, Invariant, Phase};

impl BriscolaGame {
    pub(super) fn declare_trump(&mut self, suit: Suit) -> Result<(), ActionError> {
        let call = self.call.ok_or(Invariant::ContractIncomplete)?;
        if self.current_player != call.caller {
            return Err(ActionError::OutOfTurn {
                expected: call.caller,
                actual: self.current_player,
            });
        }

        let partner_card = Card::new(call.rank, suit);
        self.trump = Some(suit);
        self.partner_card = Some(partner_card);
        self.current_player = self.first_player;
        self.phase = Phase::Trick;

        info!(caller = %call.caller, trump = %suit, %partner_card, "trump declared");
        Ok(())
    }
}

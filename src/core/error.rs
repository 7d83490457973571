//! Errors returned by the engine.
//!
//! Every rejected action leaves the engine untouched. `InvariantViolation`
//! signals an engine bug rather than a player mistake; the hand cannot
//! continue past it.

use thiserror::Error;

use super::action::{ActionKind, Bid};
use super::phase::Phase;
use super::player::PlayerId;
use crate::cards::Card;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{player} cannot bid {bid}")]
    IllegalBid { player: PlayerId, bid: Bid },

    #[error("{player} cannot play {card}")]
    IllegalCard { player: PlayerId, card: Card },

    #[error("{action} is not accepted during {phase}")]
    WrongPhaseAction { phase: Phase, action: ActionKind },

    #[error("{actual} acted out of turn, waiting on {expected}")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },

    #[error("invariant violated: {0}")]
    InvariantViolation(#[from] Invariant),
}

/// Internal consistency checks that must hold under correct play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Invariant {
    #[error("a trick needs exactly 5 cards, got {0}")]
    TrickSize(usize),

    #[error("card points total {0}, expected 120")]
    PointTotal(u32),

    #[error("caller or trump missing after the auction closed")]
    ContractIncomplete,

    #[error("hand scored before the partner card was played")]
    PartnerUnrevealed,

    #[error("game points sum to {0}, expected 0")]
    PayoutImbalance(i32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_error_messages() {
        let err = ActionError::IllegalCard {
            player: PlayerId::new(2),
            card: Card::new(Rank::Re, Suit::Spade),
        };
        assert_eq!(err.to_string(), "Player 2 cannot play Re di Spade");

        let err = ActionError::WrongPhaseAction {
            phase: Phase::Bidding,
            action: ActionKind::Card,
        };
        assert_eq!(err.to_string(), "card play is not accepted during bidding");
    }

    #[test]
    fn test_invariant_converts() {
        let err: ActionError = Invariant::PointTotal(118).into();
        assert_eq!(err, ActionError::InvariantViolation(Invariant::PointTotal(118)));
        assert_eq!(
            err.to_string(),
            "invariant violated: card points total 118, expected 120"
        );
    }
}

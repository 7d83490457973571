//! Phases of a single hand.

use serde::{Deserialize, Serialize};

use super::action::ActionKind;

/// Hand progression: `Bidding -> ChooseTrump -> Trick -> Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Auction for the right to call.
    Bidding,
    /// The caller names the trump suit.
    ChooseTrump,
    /// Eight tricks of five cards.
    Trick,
    /// Hand scored; no further actions.
    Done,
}

impl Phase {
    /// The kind of action this phase accepts, `None` once the hand is over.
    #[must_use]
    pub const fn expected_action(self) -> Option<ActionKind> {
        match self {
            Phase::Bidding => Some(ActionKind::Bid),
            Phase::ChooseTrump => Some(ActionKind::Suit),
            Phase::Trick => Some(ActionKind::Card),
            Phase::Done => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Bidding => "bidding",
            Phase::ChooseTrump => "trump declaration",
            Phase::Trick => "trick play",
            Phase::Done => "end of hand",
        };
        f.write_str(name)
    }
}

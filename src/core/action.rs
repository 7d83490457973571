//! Actions: a phase-tagged payload plus its numeric encoding.
//!
//! Every phase accepts exactly one kind of payload:
//! - Bidding: a `Bid` (rank or pass)
//! - Trump declaration: a `Suit`
//! - Trick play: a `Card`
//!
//! Adapters exchange actions as small integers. The index space is local to
//! the phase: bids use `0..=10` (rank ordinal, 10 = pass), suits `0..4`,
//! cards `0..40`.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::player::PlayerId;
use crate::cards::{Card, Rank, Suit};

/// A player's standing in the auction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bid {
    /// Has not spoken yet this hand.
    #[default]
    NoBid,
    /// Out of the auction for the rest of the hand.
    Pass,
    /// Claims to hold this rank in the yet-undeclared trump suit.
    Rank(Rank),
}

impl Bid {
    /// Encoded index of a pass.
    pub const PASS_INDEX: u8 = Rank::COUNT as u8;

    /// Number of encodable bids.
    pub const COUNT: usize = Rank::COUNT + 1;

    /// Encoded index: rank ordinal, or `PASS_INDEX`. `NoBid` has none.
    #[must_use]
    pub fn index(self) -> Option<u8> {
        match self {
            Bid::NoBid => None,
            Bid::Pass => Some(Self::PASS_INDEX),
            Bid::Rank(rank) => Some(rank.index()),
        }
    }

    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        if index == Self::PASS_INDEX {
            Some(Bid::Pass)
        } else {
            Rank::from_index(index).map(Bid::Rank)
        }
    }

    #[must_use]
    pub fn rank(self) -> Option<Rank> {
        match self {
            Bid::Rank(rank) => Some(rank),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pass(self) -> bool {
        self == Bid::Pass
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bid::NoBid => f.write_str("no bid"),
            Bid::Pass => f.write_str("pass"),
            Bid::Rank(rank) => write!(f, "{}", rank),
        }
    }
}

/// Tag of a `GameAction`, used to match an action against the phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Bid,
    Suit,
    Card,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Bid => "bid",
            ActionKind::Suit => "trump declaration",
            ActionKind::Card => "card play",
        };
        f.write_str(name)
    }
}

/// A complete game action.
///
/// ```
/// use briscola_chiamata::cards::{Card, Rank, Suit};
/// use briscola_chiamata::core::{Bid, GameAction, Phase};
///
/// let play = GameAction::Card(Card::new(Rank::Tre, Suit::Coppe));
/// assert_eq!(play.encode(), Some(38));
/// assert_eq!(GameAction::decode(Phase::Trick, 38), Some(play));
/// assert_eq!(GameAction::decode(Phase::Bidding, 10), Some(GameAction::Bid(Bid::Pass)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    Bid(Bid),
    Suit(Suit),
    Card(Card),
}

impl GameAction {
    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            GameAction::Bid(_) => ActionKind::Bid,
            GameAction::Suit(_) => ActionKind::Suit,
            GameAction::Card(_) => ActionKind::Card,
        }
    }

    /// Phase-local numeric encoding. `None` for `Bid::NoBid`.
    #[must_use]
    pub fn encode(self) -> Option<u8> {
        match self {
            GameAction::Bid(bid) => bid.index(),
            GameAction::Suit(suit) => Some(suit.index()),
            GameAction::Card(card) => Some(card.index()),
        }
    }

    /// Decode an index in the action space of `phase`.
    #[must_use]
    pub fn decode(phase: Phase, index: u8) -> Option<Self> {
        match phase.expected_action()? {
            ActionKind::Bid => Bid::from_index(index).map(GameAction::Bid),
            ActionKind::Suit => Suit::from_index(index).map(GameAction::Suit),
            ActionKind::Card => Card::from_index(index).map(GameAction::Card),
        }
    }
}

impl std::fmt::Display for GameAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameAction::Bid(bid) => write!(f, "bid {}", bid),
            GameAction::Suit(suit) => write!(f, "trump {}", suit),
            GameAction::Card(card) => write!(f, "play {}", card),
        }
    }
}

/// An accepted action with the seat that took it.
///
/// Used for replay and training data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: GameAction,

    /// Position of the action within the hand, starting at 0.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: GameAction, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}

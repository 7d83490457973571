//! The fixed 40-card deck and dealing.

use smallvec::SmallVec;

use super::card::{Card, Rank, Suit};
use crate::core::config::{DECK_SIZE, HAND_SIZE};
use crate::core::{GameRng, PlayerMap};

/// A player's hand. Never holds more than `HAND_SIZE` cards, so it stays inline.
pub type Hand = SmallVec<[Card; HAND_SIZE]>;

/// The full set of 40 (rank, suit) combinations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck in index order (`Card::index` == position).
    #[must_use]
    pub fn new() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Fresh deck shuffled with the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::new();
        rng.shuffle(&mut deck.cards);
        deck
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of card points over the deck.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.cards.iter().map(|c| c.points()).sum()
    }

    /// Deal consecutive blocks of `HAND_SIZE` cards, seat 0 first.
    ///
    /// Consumes the deck: every card ends up in exactly one hand.
    #[must_use]
    pub fn deal(self) -> PlayerMap<Hand> {
        debug_assert_eq!(self.cards.len(), DECK_SIZE);
        PlayerMap::new(|player| {
            let start = player.index() * HAND_SIZE;
            self.cards
                .get(start..start + HAND_SIZE)
                .map(SmallVec::from_slice)
                .unwrap_or_default()
        })
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use std::collections::HashSet;

    #[test]
    fn test_new_deck_is_index_ordered() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.index() as usize, i);
        }
    }

    #[test]
    fn test_deck_totals_120_points() {
        assert_eq!(Deck::new().total_points(), 120);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Deck::shuffled(&mut GameRng::new(9));
        let b = Deck::shuffled(&mut GameRng::new(9));
        let c = Deck::shuffled(&mut GameRng::new(10));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Deck::new());
    }

    #[test]
    fn test_deal_partitions_deck() {
        let hands = Deck::shuffled(&mut GameRng::new(3)).deal();

        let mut seen = HashSet::new();
        for player in PlayerId::all() {
            assert_eq!(hands[player].len(), HAND_SIZE);
            for card in &hands[player] {
                assert!(seen.insert(card.index()));
            }
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }
}

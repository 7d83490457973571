//! Trick resolution.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::config::NUM_PLAYERS;
use crate::core::{Invariant, PlayerId};

/// Winner and value of a resolved trick, relative to play order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrickOutcome {
    /// Position in play order (0 = the card that led).
    pub winner: usize,
    /// Sum of card points in the trick.
    pub points: u32,
}

/// Resolve a full trick of five cards given in play order.
///
/// The leading card starts as the winner. A later card takes over when it
/// is trump against a non-trump winner, or follows the winner's suit with a
/// higher rank. Anything else never wins, so off-suit discards are inert
/// and the led suit needs no separate tracking.
///
/// ```
/// use briscola_chiamata::cards::{Card, Rank, Suit};
/// use briscola_chiamata::rules::winning_card;
///
/// let trick = [
///     Card::new(Rank::Due, Suit::Denari),
///     Card::new(Rank::Quattro, Suit::Bastoni),
///     Card::new(Rank::Sette, Suit::Coppe),
///     Card::new(Rank::Re, Suit::Denari),
///     Card::new(Rank::Fante, Suit::Denari),
/// ];
/// let outcome = winning_card(&trick, Suit::Coppe).unwrap();
/// assert_eq!((outcome.winner, outcome.points), (2, 6));
/// ```
pub fn winning_card(trick: &[Card], trump: Suit) -> Result<TrickOutcome, Invariant> {
    if trick.len() != NUM_PLAYERS {
        return Err(Invariant::TrickSize(trick.len()));
    }

    let mut winner = 0;
    for (i, card) in trick.iter().enumerate().skip(1) {
        let best = trick[winner];
        let beats = (card.suit == trump && best.suit != trump)
            || (card.suit == best.suit && card.rank > best.rank);
        if beats {
            winner = i;
        }
    }

    Ok(TrickOutcome {
        winner,
        points: trick.iter().map(|c| c.points()).sum(),
    })
}

/// Snapshot of a completed trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRecord {
    /// Cards in play order; `cards[0]` was led.
    pub cards: [Card; NUM_PLAYERS],
    /// Seat that played `cards[0]`.
    pub leader: PlayerId,
    /// Seat that took the trick.
    pub winner: PlayerId,
    /// Card points won.
    pub points: u32,
}

impl TrickRecord {
    /// Seat that played the card at `position` in play order.
    #[must_use]
    pub fn player_at(&self, position: usize) -> PlayerId {
        self.leader.offset(position)
    }

    /// Card played by `player` in this trick.
    #[must_use]
    pub fn card_of(&self, player: PlayerId) -> Card {
        let position = (player.index() + NUM_PLAYERS - self.leader.index()) % NUM_PLAYERS;
        self.cards[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_no_trump_in_trick() {
        let trick = [
            c(Rank::Due, Suit::Denari),
            c(Rank::Quattro, Suit::Bastoni),
            c(Rank::Asso, Suit::Coppe),
            c(Rank::Re, Suit::Denari),
            c(Rank::Fante, Suit::Denari),
        ];
        let outcome = winning_card(&trick, Suit::Spade).unwrap();
        assert_eq!(outcome, TrickOutcome { winner: 3, points: 17 });
    }

    #[test]
    fn test_single_trump_wins_wherever_it_lands() {
        let trick = [
            c(Rank::Due, Suit::Denari),
            c(Rank::Quattro, Suit::Bastoni),
            c(Rank::Re, Suit::Denari),
            c(Rank::Sette, Suit::Coppe),
            c(Rank::Fante, Suit::Denari),
        ];
        let outcome = winning_card(&trick, Suit::Coppe).unwrap();
        assert_eq!(outcome, TrickOutcome { winner: 3, points: 6 });
    }

    #[test]
    fn test_leading_trump_holds() {
        let trick = [
            c(Rank::Due, Suit::Denari),
            c(Rank::Quattro, Suit::Bastoni),
            c(Rank::Sette, Suit::Coppe),
            c(Rank::Re, Suit::Spade),
            c(Rank::Fante, Suit::Bastoni),
        ];
        let outcome = winning_card(&trick, Suit::Denari).unwrap();
        assert_eq!(outcome, TrickOutcome { winner: 0, points: 6 });
    }

    #[test]
    fn test_higher_trump_overtakes_trump() {
        let trick = [
            c(Rank::Due, Suit::Denari),
            c(Rank::Re, Suit::Bastoni),
            c(Rank::Asso, Suit::Denari),
            c(Rank::Re, Suit::Spade),
            c(Rank::Tre, Suit::Bastoni),
        ];
        let outcome = winning_card(&trick, Suit::Bastoni).unwrap();
        assert_eq!(outcome, TrickOutcome { winner: 4, points: 29 });
    }

    #[test]
    fn test_off_suit_ace_never_wins() {
        let trick = [
            c(Rank::Sei, Suit::Spade),
            c(Rank::Asso, Suit::Denari),
            c(Rank::Tre, Suit::Coppe),
            c(Rank::Cinque, Suit::Spade),
            c(Rank::Due, Suit::Spade),
        ];
        let outcome = winning_card(&trick, Suit::Bastoni).unwrap();
        assert_eq!(outcome.winner, 0);
        assert_eq!(outcome.points, 21);
    }

    #[test]
    fn test_wrong_trick_size_fails() {
        let four = [c(Rank::Due, Suit::Denari); 4];
        assert_eq!(
            winning_card(&four, Suit::Denari),
            Err(Invariant::TrickSize(4))
        );

        let six = [c(Rank::Due, Suit::Denari); 6];
        assert_eq!(
            winning_card(&six, Suit::Denari),
            Err(Invariant::TrickSize(6))
        );

        assert_eq!(winning_card(&[], Suit::Denari), Err(Invariant::TrickSize(0)));
    }

    #[test]
    fn test_trick_record_seats() {
        let cards = [
            c(Rank::Due, Suit::Denari),
            c(Rank::Tre, Suit::Denari),
            c(Rank::Sei, Suit::Denari),
            c(Rank::Re, Suit::Denari),
            c(Rank::Asso, Suit::Spade),
        ];
        let record = TrickRecord {
            cards,
            leader: PlayerId::new(3),
            winner: PlayerId::new(4),
            points: 25,
        };

        assert_eq!(record.player_at(0), PlayerId::new(3));
        assert_eq!(record.player_at(2), PlayerId::new(0));
        assert_eq!(record.card_of(PlayerId::new(3)), cards[0]);
        assert_eq!(record.card_of(PlayerId::new(1)), cards[3]);
    }
}

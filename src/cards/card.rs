//! Italian-suited card values: ranks, suits and cards.
//!
//! ## Encodings
//!
//! Each value has a stable numeric index used by environment adapters:
//! - `Rank`: ordinal 0 (Due, weakest) to 9 (Asso, strongest)
//! - `Suit`: ordinal 0 (Denari) to 3 (Coppe)
//! - `Card`: `suit * 10 + rank`, a bijection onto `0..40`

use serde::{Deserialize, Serialize};

/// Card rank, ordered from weakest to strongest.
///
/// Ordering and equality follow the ordinal, so `Rank::Asso > Rank::Tre`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Due = 0,
    Quattro = 1,
    Cinque = 2,
    Sei = 3,
    Sette = 4,
    Fante = 5,
    Cavallo = 6,
    Re = 7,
    Tre = 8,
    Asso = 9,
}

impl Rank {
    /// Number of distinct ranks.
    pub const COUNT: usize = 10;

    /// All ranks, weakest first.
    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::Due,
        Rank::Quattro,
        Rank::Cinque,
        Rank::Sei,
        Rank::Sette,
        Rank::Fante,
        Rank::Cavallo,
        Rank::Re,
        Rank::Tre,
        Rank::Asso,
    ];

    /// Ordinal in `0..10`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Card points carried by this rank. The whole deck sums to 120.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Rank::Asso => 11,
            Rank::Tre => 10,
            Rank::Re => 4,
            Rank::Cavallo => 3,
            Rank::Fante => 2,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Due => "Due",
            Rank::Quattro => "Quattro",
            Rank::Cinque => "Cinque",
            Rank::Sei => "Sei",
            Rank::Sette => "Sette",
            Rank::Fante => "Fante",
            Rank::Cavallo => "Cavallo",
            Rank::Re => "Re",
            Rank::Tre => "Tre",
            Rank::Asso => "Asso",
        }
    }

    /// One-character label, e.g. `A` for Asso or `7` for Sette.
    #[must_use]
    pub const fn short_name(self) -> char {
        match self {
            Rank::Due => '2',
            Rank::Quattro => '4',
            Rank::Cinque => '5',
            Rank::Sei => '6',
            Rank::Sette => '7',
            Rank::Fante => 'F',
            Rank::Cavallo => 'C',
            Rank::Re => 'R',
            Rank::Tre => '3',
            Rank::Asso => 'A',
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four Italian suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Denari = 0,
    Spade = 1,
    Bastoni = 2,
    Coppe = 3,
}

impl Suit {
    pub const COUNT: usize = 4;

    pub const ALL: [Suit; Suit::COUNT] = [Suit::Denari, Suit::Spade, Suit::Bastoni, Suit::Coppe];

    /// Ordinal in `0..4`, also the trump declaration index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Denari => "Denari",
            Suit::Spade => "Spade",
            Suit::Bastoni => "Bastoni",
            Suit::Coppe => "Coppe",
        }
    }

    /// First letter of the suit name.
    #[must_use]
    pub const fn short_name(self) -> char {
        match self {
            Suit::Denari => 'D',
            Suit::Spade => 'S',
            Suit::Bastoni => 'B',
            Suit::Coppe => 'C',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable (rank, suit) pair.
///
/// ```
/// use briscola_chiamata::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Asso, Suit::Spade);
/// assert_eq!(card.index(), 19);
/// assert_eq!(Card::from_index(19), Some(card));
/// assert_eq!(card.to_string(), "Asso di Spade");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Stable index `suit * 10 + rank` in `0..40`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.suit.index() * Rank::COUNT as u8 + self.rank.index()
    }

    /// Inverse of [`Card::index`]. Returns `None` outside `0..40`.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        let suit = Suit::from_index(index / Rank::COUNT as u8)?;
        let rank = Rank::from_index(index % Rank::COUNT as u8)?;
        Some(Self { rank, suit })
    }

    #[must_use]
    pub const fn points(self) -> u32 {
        self.rank.points()
    }

    /// Two-character label, e.g. `AD` for Asso di Denari.
    #[must_use]
    pub fn short_name(self) -> String {
        format!("{}{}", self.rank.short_name(), self.suit.short_name())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} di {}", self.rank, self.suit)
    }
}

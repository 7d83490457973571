//! Card model: ranks, suits, cards and the 40-card deck.
//!
//! ## Key Types
//!
//! - `Rank`: Due (weakest) to Asso (strongest), with card points
//! - `Suit`: Denari, Spade, Bastoni, Coppe
//! - `Card`: (rank, suit) with a stable index in `0..40`
//! - `Deck`: the full deck, shuffled by the engine's RNG and dealt in
//!   blocks of eight

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, Hand};

//! Briscola Chiamata: five players, one hand from the deal to scoring.
//!
//! ## Flow
//!
//! 1. **Bidding**: seats bid descending ranks or pass until one rank bid
//!    stands against four passes. That seat is the caller.
//! 2. **Trump declaration**: the caller names the trump suit. The called
//!    rank in that suit becomes the partner card.
//! 3. **Tricks**: eight tricks of five cards. Playing the partner card
//!    reveals the partner, which is the caller themselves in a solo hand.
//! 4. **Scoring**: the caller's side needs more than 60 of the 120 card
//!    points; payouts are zero-sum.

mod bidding;
mod declaration;
mod game;
mod play;

pub use bidding::{Auction, AuctionStatus};
pub use game::{BriscolaGame, Call};

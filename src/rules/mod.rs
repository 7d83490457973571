//! Game rules that do not depend on engine state.
//!
//! - `trick`: which card takes a trick and what it is worth
//! - `scoring`: end-of-hand payouts
//! - `engine`: the `RulesEngine` trait adapters drive a hand through

pub mod engine;
pub mod scoring;
pub mod trick;

pub use engine::{action_space_size, RulesEngine};
pub use scoring::{score_hand, GameResult};
pub use trick::{winning_card, TrickOutcome, TrickRecord};

//! # briscola-chiamata
//!
//! A deterministic rules engine for one hand of Briscola Chiamata, the
//! five-player Italian trick-taking game, built for RL training loops.
//!
//! ## Design Principles
//!
//! 1. **Single authority**: the engine deals, runs the auction, reveals the
//!    partner, adjudicates tricks and scores. Agents only submit actions.
//!
//! 2. **Validate, then commit**: a rejected action leaves the engine
//!    exactly as it was.
//!
//! 3. **Reproducible**: all randomness comes from one seeded RNG owned by
//!    the engine. Same seed plus same actions gives the same hand.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, phases, actions, errors
//! - `cards`: ranks, suits, cards and the 40-card deck
//! - `rules`: trick resolution, scoring and the `RulesEngine` trait
//! - `games`: the Briscola Chiamata engine

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionError, ActionKind, ActionRecord, AllPassPolicy, Bid, GameAction, GameConfig, GameRng,
    GameRngState, Invariant, Phase, PlayerId, PlayerMap,
};

pub use crate::cards::{Card, Deck, Hand, Rank, Suit};

pub use crate::rules::{score_hand, winning_card, GameResult, RulesEngine, TrickOutcome, TrickRecord};

pub use crate::games::briscola::{Auction, AuctionStatus, BriscolaGame, Call};

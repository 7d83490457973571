//! Core engine types: players, RNG, configuration, phases, actions, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;

pub use action::{ActionKind, ActionRecord, Bid, GameAction};
pub use config::{AllPassPolicy, GameConfig};
pub use error::{ActionError, Invariant};
pub use phase::Phase;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};

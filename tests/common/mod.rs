//! Shared helpers for integration tests: logging and a random hand driver.

#![allow(dead_code)]

use briscola_chiamata::{
    Bid, BriscolaGame, Card, GameAction, GameRng, Phase, PlayerId, PlayerMap, RulesEngine,
};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Upper bound on actions in one hand, redeals included.
pub const MAX_ACTIONS: usize = 2_000;

/// Drive `game` to the end with uniformly random legal actions.
///
/// Returns the applied actions in order.
pub fn play_random_hand(game: &mut BriscolaGame, rng: &mut GameRng) -> Vec<GameAction> {
    let mut applied = Vec::new();
    while !game.done() {
        assert!(applied.len() < MAX_ACTIONS, "hand did not finish");
        let legal = game.legal_actions();
        let action = *rng.choose(&legal).expect("a live hand always has a legal action");
        game.apply_action(action).expect("legal action rejected");
        applied.push(action);
    }
    applied
}

/// Drive `game` with random legal actions until `phase` is reached.
pub fn play_random_until(game: &mut BriscolaGame, rng: &mut GameRng, phase: Phase) {
    let mut steps = 0;
    while game.phase() != phase && !game.done() {
        assert!(steps < MAX_ACTIONS, "phase never reached");
        let legal = game.legal_actions();
        let action = *rng.choose(&legal).unwrap();
        game.apply_action(action).unwrap();
        steps += 1;
    }
}

/// Bidding where the opening seat bids `rank` and everyone else passes.
pub fn open_and_pass(game: &mut BriscolaGame, rank: briscola_chiamata::Rank) {
    game.apply_action(GameAction::Bid(Bid::Rank(rank))).unwrap();
    for _ in 0..4 {
        game.apply_action(GameAction::Bid(Bid::Pass)).unwrap();
    }
}

/// Everything observable about a hand, for before/after comparisons.
#[derive(Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub phase: Phase,
    pub current_player: PlayerId,
    pub first_player: PlayerId,
    pub hands: Vec<Vec<Card>>,
    pub current_trick: Vec<Card>,
    pub bid_round: PlayerMap<Bid>,
    pub points: PlayerMap<u32>,
    pub caller: Option<PlayerId>,
    pub partner: Option<PlayerId>,
    pub n_trick: usize,
    pub history_len: usize,
}

pub fn snapshot(game: &BriscolaGame) -> Snapshot {
    Snapshot {
        phase: game.phase(),
        current_player: game.current_player(),
        first_player: game.first_player(),
        hands: PlayerId::all().map(|p| game.hand(p).to_vec()).collect(),
        current_trick: game.current_trick().to_vec(),
        bid_round: game.bid_round().clone(),
        points: game.per_player_points().clone(),
        caller: game.caller(),
        partner: game.partner(),
        n_trick: game.n_trick(),
        history_len: game.action_history().len(),
    }
}

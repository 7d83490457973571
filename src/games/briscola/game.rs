//! Briscola Chiamata engine: hand state, dispatch and queries.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info};

use super::bidding::Auction;
use crate::cards::{Card, Deck, Hand, Rank, Suit};
use crate::core::config::NUM_PLAYERS;
use crate::core::{
    ActionError, ActionRecord, Bid, GameAction, GameConfig, GameRng, GameRngState, Phase,
    PlayerId, PlayerMap,
};
use crate::rules::{GameResult, RulesEngine, TrickRecord};

/// Outcome of the auction: who called and at which rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Call {
    pub caller: PlayerId,
    pub rank: Rank,
}

/// One hand of Briscola Chiamata, from the deal to final scoring.
///
/// ```
/// use briscola_chiamata::core::{Bid, GameAction, GameConfig, Phase};
/// use briscola_chiamata::games::briscola::BriscolaGame;
/// use briscola_chiamata::rules::RulesEngine;
///
/// let mut game = BriscolaGame::new(GameConfig::new(42));
/// assert_eq!(game.phase(), Phase::Bidding);
///
/// let first = game.current_player();
/// game.apply_action(GameAction::Bid(Bid::Pass)).unwrap();
/// assert_eq!(game.current_player(), first.next());
/// ```
#[derive(Clone, Debug)]
pub struct BriscolaGame {
    pub(super) config: GameConfig,
    pub(super) rng: GameRng,
    pub(super) phase: Phase,
    pub(super) hands: PlayerMap<Hand>,
    pub(super) points: PlayerMap<u32>,
    pub(super) first_player: PlayerId,
    pub(super) current_player: PlayerId,
    pub(super) auction: Auction,
    pub(super) call: Option<Call>,
    pub(super) trump: Option<Suit>,
    pub(super) partner_card: Option<Card>,
    pub(super) partner: Option<PlayerId>,
    pub(super) current_trick: SmallVec<[Card; NUM_PLAYERS]>,
    pub(super) n_trick: usize,
    pub(super) tricks: Vector<TrickRecord>,
    pub(super) result: Option<GameResult>,
    pub(super) redeals: u32,
    pub(super) action_history: Vector<ActionRecord>,
}

impl BriscolaGame {
    /// Create an engine and deal the first hand from `config.seed`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed;
        let mut game = Self {
            config,
            rng: GameRng::new(seed),
            phase: Phase::Bidding,
            hands: PlayerMap::with_default(),
            points: PlayerMap::with_value(0),
            first_player: PlayerId::new(0),
            current_player: PlayerId::new(0),
            auction: Auction::new(),
            call: None,
            trump: None,
            partner_card: None,
            partner: None,
            current_trick: SmallVec::new(),
            n_trick: 0,
            tricks: Vector::new(),
            result: None,
            redeals: 0,
            action_history: Vector::new(),
        };
        game.reset(seed);
        game
    }

    /// Reseed the RNG, shuffle, deal eight cards to each seat and draw the
    /// first player. All bidding, trick and score state is cleared.
    pub fn reset(&mut self, seed: u64) {
        self.rng.reseed(seed);
        self.redeals = 0;
        self.action_history = Vector::new();
        self.deal();
    }

    /// Shuffle and deal from the current RNG position.
    pub(super) fn deal(&mut self) {
        self.hands = Deck::shuffled(&mut self.rng).deal();
        self.first_player = PlayerId::new(self.rng.gen_range_usize(0..NUM_PLAYERS) as u8);
        self.current_player = self.first_player;
        self.phase = Phase::Bidding;
        self.points = PlayerMap::with_value(0);
        self.auction = Auction::new();
        self.call = None;
        self.trump = None;
        self.partner_card = None;
        self.partner = None;
        self.current_trick.clear();
        self.n_trick = 0;
        self.tricks = Vector::new();
        self.result = None;

        info!(
            seed = self.rng.seed(),
            first_player = %self.first_player,
            "hand dealt"
        );
    }

    /// Apply an action on behalf of `player`.
    ///
    /// With `enforce_turn` set, a player other than the current one is
    /// rejected with `OutOfTurn`.
    pub fn apply_action_as(
        &mut self,
        player: PlayerId,
        action: GameAction,
    ) -> Result<(), ActionError> {
        self.check_phase(action)?;
        if self.config.enforce_turn && player != self.current_player {
            debug!(%player, expected = %self.current_player, %action, "action out of turn");
            return Err(ActionError::OutOfTurn {
                expected: self.current_player,
                actual: player,
            });
        }
        self.dispatch(action)
    }

    fn check_phase(&self, action: GameAction) -> Result<(), ActionError> {
        if self.phase.expected_action() == Some(action.kind()) {
            return Ok(());
        }
        debug!(phase = %self.phase, %action, "action does not match phase");
        Err(ActionError::WrongPhaseAction {
            phase: self.phase,
            action: action.kind(),
        })
    }

    fn dispatch(&mut self, action: GameAction) -> Result<(), ActionError> {
        let player = self.current_player;
        let outcome = match (self.phase, action) {
            (Phase::Bidding, GameAction::Bid(bid)) => self.apply_bid(bid),
            (Phase::ChooseTrump, GameAction::Suit(suit)) => self.declare_trump(suit),
            (Phase::Trick, GameAction::Card(card)) => self.play_card(card),
            (phase, action) => Err(ActionError::WrongPhaseAction {
                phase,
                action: action.kind(),
            }),
        };

        match outcome {
            Ok(()) => {
                let sequence = self.action_history.len() as u32;
                self.action_history
                    .push_back(ActionRecord::new(player, action, sequence));
                Ok(())
            }
            Err(err) => {
                debug!(%player, %action, error = %err, "action rejected");
                Err(err)
            }
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat whose action is expected next. Meaningless once `done()`.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Seat that leads the current trick (or opened the auction).
    #[must_use]
    pub fn first_player(&self) -> PlayerId {
        self.first_player
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    /// Cards of the trick in progress, in play order.
    #[must_use]
    pub fn current_trick(&self) -> &[Card] {
        &self.current_trick
    }

    /// Latest bid of every seat.
    #[must_use]
    pub fn bid_round(&self) -> &PlayerMap<Bid> {
        self.auction.bids()
    }

    /// Strongest outstanding rank bid.
    #[must_use]
    pub fn highest_bid(&self) -> Option<Rank> {
        self.auction.highest().map(|(_, rank)| rank)
    }

    #[must_use]
    pub fn highest_bidder(&self) -> Option<PlayerId> {
        self.auction.highest().map(|(player, _)| player)
    }

    /// Winner of the auction, once bidding is over.
    #[must_use]
    pub fn caller(&self) -> Option<PlayerId> {
        self.call.map(|call| call.caller)
    }

    /// Rank the caller committed to.
    #[must_use]
    pub fn called_rank(&self) -> Option<Rank> {
        self.call.map(|call| call.rank)
    }

    /// Trump suit, once declared.
    #[must_use]
    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// The card whose holder is the caller's partner.
    #[must_use]
    pub fn partner_card(&self) -> Option<Card> {
        self.partner_card
    }

    /// Seat that played the partner card; `None` until it hits the table.
    #[must_use]
    pub fn partner(&self) -> Option<PlayerId> {
        self.partner
    }

    /// Caller's side once the partner is known: just the caller when solo.
    #[must_use]
    pub fn caller_team(&self) -> Option<Vec<PlayerId>> {
        let caller = self.caller()?;
        let partner = self.partner?;
        if partner == caller {
            Some(vec![caller])
        } else {
            Some(vec![caller, partner])
        }
    }

    /// Card points taken so far by each seat.
    #[must_use]
    pub fn per_player_points(&self) -> &PlayerMap<u32> {
        &self.points
    }

    /// Final payouts, available once the hand is done.
    #[must_use]
    pub fn game_points(&self) -> Option<&PlayerMap<i32>> {
        self.result.as_ref().map(|r| &r.game_points)
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Completed tricks so far.
    #[must_use]
    pub fn n_trick(&self) -> usize {
        self.n_trick
    }

    #[must_use]
    pub fn tricks(&self) -> &Vector<TrickRecord> {
        &self.tricks
    }

    /// Auctions restarted because every seat passed.
    #[must_use]
    pub fn redeals(&self) -> u32 {
        self.redeals
    }

    /// Accepted actions since the last reset, in order.
    #[must_use]
    pub fn action_history(&self) -> &Vector<ActionRecord> {
        &self.action_history
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Legality ===

    /// Whether the current player may bid `rank` right now.
    #[must_use]
    pub fn can_bid(&self, rank: Rank) -> bool {
        self.phase == Phase::Bidding && self.auction.is_legal(self.current_player, Bid::Rank(rank))
    }

    /// Legal bids for the current player, ranks first then pass.
    #[must_use]
    pub fn legal_bids(&self) -> Vec<Bid> {
        if self.phase != Phase::Bidding {
            return Vec::new();
        }
        (0..Bid::COUNT as u8)
            .filter_map(Bid::from_index)
            .filter(|&bid| self.auction.is_legal(self.current_player, bid))
            .collect()
    }

    /// Cards `player` may play now: their whole hand on their turn in a
    /// trick, nothing otherwise. There is no obligation to follow suit.
    #[must_use]
    pub fn legal_cards(&self, player: PlayerId) -> Vec<Card> {
        if self.phase != Phase::Trick || player != self.current_player {
            return Vec::new();
        }
        self.hands[player].to_vec()
    }
}

impl RulesEngine for BriscolaGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn to_act(&self) -> Option<PlayerId> {
        (!self.done()).then_some(self.current_player)
    }

    fn legal_actions(&self) -> Vec<GameAction> {
        match self.phase {
            Phase::Bidding => self.legal_bids().into_iter().map(GameAction::Bid).collect(),
            Phase::ChooseTrump => Suit::ALL.iter().copied().map(GameAction::Suit).collect(),
            Phase::Trick => self
                .legal_cards(self.current_player)
                .into_iter()
                .map(GameAction::Card)
                .collect(),
            Phase::Done => Vec::new(),
        }
    }

    fn apply_action(&mut self, action: GameAction) -> Result<(), ActionError> {
        self.check_phase(action)?;
        self.dispatch(action)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result.clone()
    }
}

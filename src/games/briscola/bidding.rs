//! The auction for the right to call.
//!
//! Players speak in seat order, one bid per turn, whatever they bid. A rank
//! bid must be strictly lower than the strongest outstanding rank bid, since
//! claiming a lower rank is the stronger commitment. A pass is final: that
//! seat may only pass for the rest of the hand.
//!
//! The auction closes as soon as one seat holds a rank bid and the other
//! four have passed.

use tracing::{debug, info, warn};

use super::game::{BriscolaGame, Call};
use crate::cards::Rank;
use crate::core::config::NUM_PLAYERS;
use crate::core::{ActionError, AllPassPolicy, Bid, Phase, PlayerId, PlayerMap};

/// State of the auction after a bid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionStatus {
    /// Keep bidding.
    Open,
    /// One rank bid left standing against four passes.
    Won(Call),
    /// Every seat passed without a rank bid.
    AllPassed,
}

/// Latest bid of every seat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Auction {
    bids: PlayerMap<Bid>,
}

impl Auction {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bids: PlayerMap::with_value(Bid::NoBid),
        }
    }

    #[must_use]
    pub fn bids(&self) -> &PlayerMap<Bid> {
        &self.bids
    }

    /// Strongest outstanding rank bid and its owner.
    ///
    /// Outstanding bids are the seats' latest bids, so a seat that passes
    /// after bidding withdraws its rank.
    #[must_use]
    pub fn highest(&self) -> Option<(PlayerId, Rank)> {
        self.bids
            .iter()
            .filter_map(|(player, bid)| bid.rank().map(|rank| (player, rank)))
            .min_by_key(|&(_, rank)| rank)
    }

    /// Whether `player` may submit `bid`.
    #[must_use]
    pub fn is_legal(&self, player: PlayerId, bid: Bid) -> bool {
        match bid {
            Bid::NoBid => false,
            Bid::Pass => true,
            Bid::Rank(rank) => {
                !self.bids[player].is_pass()
                    && self.highest().map_or(true, |(_, highest)| rank < highest)
            }
        }
    }

    /// Record `bid` as the latest bid of `player`. Legality is the caller's concern.
    pub fn record(&mut self, player: PlayerId, bid: Bid) {
        self.bids[player] = bid;
    }

    #[must_use]
    pub fn status(&self) -> AuctionStatus {
        let passes = self.bids.values().filter(|b| b.is_pass()).count();
        if passes == NUM_PLAYERS {
            return AuctionStatus::AllPassed;
        }
        match self.highest() {
            Some((caller, rank)) if passes == NUM_PLAYERS - 1 => {
                AuctionStatus::Won(Call { caller, rank })
            }
            _ => AuctionStatus::Open,
        }
    }
}

impl Default for Auction {
    fn default() -> Self {
        Self::new()
    }
}

impl BriscolaGame {
    pub(super) fn apply_bid(&mut self, bid: Bid) -> Result<(), ActionError> {
        let player = self.current_player;
        if !self.auction.is_legal(player, bid) {
            return Err(ActionError::IllegalBid { player, bid });
        }

        self.auction.record(player, bid);
        debug!(%player, %bid, "bid accepted");

        match self.auction.status() {
            AuctionStatus::Open => self.current_player = player.next(),
            AuctionStatus::Won(call) => self.close_auction(call),
            AuctionStatus::AllPassed => self.resolve_all_pass(),
        }
        Ok(())
    }

    fn close_auction(&mut self, call: Call) {
        info!(caller = %call.caller, rank = %call.rank, "auction won");
        self.call = Some(call);
        self.current_player = call.caller;
        self.phase = Phase::ChooseTrump;
    }

    fn resolve_all_pass(&mut self) {
        match self.config.all_pass_policy {
            AllPassPolicy::Redeal => {
                self.redeals += 1;
                warn!(redeals = self.redeals, "every player passed, redealing");
                self.deal();
            }
            AllPassPolicy::ForcedCall => {
                let caller = self.first_player;
                warn!(%caller, "every player passed, first player forced to call");
                self.auction.record(caller, Bid::Rank(Rank::Due));
                self.close_auction(Call {
                    caller,
                    rank: Rank::Due,
                });
            }
        }
    }
}

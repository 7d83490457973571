//! End-of-hand scoring.
//!
//! The caller's side (caller plus partner, or the caller alone when they
//! hold the partner card themselves) needs strictly more than half of the
//! 120 card points. Payouts are zero-sum:
//!
//! | outcome     | caller | partner | each other |
//! |-------------|--------|---------|------------|
//! | solo, won   | +4     | -       | -1         |
//! | solo, lost  | -4     | -       | +1         |
//! | team, won   | +2     | +1      | -1         |
//! | team, lost  | -2     | -1      | +1         |

use serde::{Deserialize, Serialize};

use crate::core::config::TOTAL_POINTS;
use crate::core::{Invariant, PlayerId, PlayerMap};

/// Final result of a hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub caller: PlayerId,
    pub partner: PlayerId,
    /// Caller played the partner card.
    pub solo: bool,
    pub caller_side_points: u32,
    pub rest_points: u32,
    pub caller_won: bool,
    /// Per-seat payout; sums to zero.
    pub game_points: PlayerMap<i32>,
}

impl GameResult {
    /// Whether `player` was on the caller's side.
    #[must_use]
    pub fn on_caller_side(&self, player: PlayerId) -> bool {
        player == self.caller || player == self.partner
    }

    /// Whether `player` finished with a positive payout.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.game_points[player] > 0
    }
}

/// Score a finished hand from accumulated card points.
///
/// Fails when the points do not total 120, when the partner was never
/// revealed, or when the payouts would not balance.
pub fn score_hand(
    caller: PlayerId,
    partner: Option<PlayerId>,
    points: &PlayerMap<u32>,
) -> Result<GameResult, Invariant> {
    let total: u32 = points.values().sum();
    if total != TOTAL_POINTS {
        return Err(Invariant::PointTotal(total));
    }
    let partner = partner.ok_or(Invariant::PartnerUnrevealed)?;

    let solo = partner == caller;
    let caller_side_points = if solo {
        points[caller]
    } else {
        points[caller] + points[partner]
    };
    let rest_points = total - caller_side_points;
    let caller_won = caller_side_points > rest_points;

    let sign = if caller_won { 1 } else { -1 };
    let caller_stake = if solo { 4 } else { 2 };
    let game_points = PlayerMap::new(|player| {
        if player == caller {
            sign * caller_stake
        } else if player == partner {
            sign
        } else {
            -sign
        }
    });

    let balance: i32 = game_points.values().sum();
    if balance != 0 {
        return Err(Invariant::PayoutImbalance(balance));
    }

    Ok(GameResult {
        caller,
        partner,
        solo,
        caller_side_points,
        rest_points,
        caller_won,
        game_points,
    })
}

//! Trick play, partner reveal and end-of-hand scoring.
//!
//! Any card in hand may be played. The full consequence of a card (trick
//! resolution and, on the last trick, scoring) is computed before anything
//! is written, so a failing invariant leaves the hand exactly as it was.

use tracing::{debug, error, info};

use super::game::BriscolaGame;
use crate::cards::Card;
use crate::core::config::{NUM_PLAYERS, NUM_TRICKS};
use crate::core::{ActionError, Invariant, Phase, PlayerId};
use crate::rules::{score_hand, winning_card, TrickRecord};

impl BriscolaGame {
    pub(super) fn play_card(&mut self, card: Card) -> Result<(), ActionError> {
        let player = self.current_player;
        let Some(position) = self.hands[player].iter().position(|&c| c == card) else {
            return Err(ActionError::IllegalCard { player, card });
        };
        let (Some(call), Some(trump)) = (self.call, self.trump) else {
            return Err(Invariant::ContractIncomplete.into());
        };

        let reveals_partner = self.partner.is_none() && self.partner_card == Some(card);
        let partner = if reveals_partner {
            Some(player)
        } else {
            self.partner
        };

        let mut trick = self.current_trick.clone();
        trick.push(card);

        if trick.len() < NUM_PLAYERS {
            self.commit_card(player, position, partner);
            self.current_trick = trick;
            self.current_player = player.next();
            return Ok(());
        }

        let outcome = winning_card(&trick, trump).map_err(fatal)?;
        let cards: [Card; NUM_PLAYERS] = trick
            .as_slice()
            .try_into()
            .map_err(|_| fatal(Invariant::TrickSize(trick.len())))?;
        let winner = self.first_player.offset(outcome.winner);

        let mut points = self.points.clone();
        points[winner] += outcome.points;

        let n_trick = self.n_trick + 1;
        let result = if n_trick == NUM_TRICKS {
            Some(score_hand(call.caller, partner, &points).map_err(fatal)?)
        } else {
            None
        };

        self.commit_card(player, position, partner);
        self.tricks.push_back(TrickRecord {
            cards,
            leader: self.first_player,
            winner,
            points: outcome.points,
        });
        self.points = points;
        self.current_trick.clear();
        self.first_player = winner;
        self.current_player = winner;
        self.n_trick = n_trick;
        info!(trick = n_trick, %winner, points = outcome.points, "trick won");

        if let Some(result) = result {
            info!(
                caller = %result.caller,
                partner = %result.partner,
                solo = result.solo,
                caller_side_points = result.caller_side_points,
                caller_won = result.caller_won,
                "hand scored"
            );
            self.result = Some(result);
            self.phase = Phase::Done;
        }
        Ok(())
    }

    fn commit_card(&mut self, player: PlayerId, position: usize, partner: Option<PlayerId>) {
        let card = self.hands[player].remove(position);
        debug!(%player, %card, "card played");
        if partner != self.partner {
            self.partner = partner;
            info!(%player, solo = self.caller() == Some(player), "partner revealed");
        }
    }
}

fn fatal(invariant: Invariant) -> ActionError {
    error!(%invariant, "engine invariant violated");
    ActionError::InvariantViolation(invariant)
}

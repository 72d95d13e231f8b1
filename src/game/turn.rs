//! Turn sequencing: actions, passing, and round ends.
//!
//! Each turn the active player takes exactly one `TurnAction`. After a card
//! play or retirement the actor's `EndOfTurn` hooks fire. Play alternates
//! until a player passes; the other player then keeps the turn until they
//! pass too, which ends the round.

use tracing::{debug, info, warn};

use super::engine::{row_owner, Game};
use crate::board::Position;
use crate::cards::HookKind;
use crate::core::{ActionRecord, GameError, Result, Seat, TurnAction};
use crate::rules::{self, GameResult, RoundResult};
use crate::zones::CardZone;

/// What a call to `Game::play_turn` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The action as it was logged.
    pub record: ActionRecord,

    /// Set when this turn ended the round.
    pub round_result: Option<RoundResult>,

    /// Seat to act next, or `None` if the game is over.
    pub next_player: Option<Seat>,

    /// Set when this turn ended the game.
    pub game_result: Option<GameResult>,
}

impl Game {
    /// Take `seat`'s turn.
    ///
    /// Illegal actions are rejected with no change to the game.
    pub fn play_turn(&mut self, seat: Seat, action: TurnAction) -> Result<TurnOutcome> {
        self.ensure_in_progress()?;
        if seat != self.active_player {
            warn!(%seat, active = %self.active_player, "not this player's turn");
            return Err(GameError::NotYourTurn(seat));
        }
        if self.players[seat].has_passed() {
            return Err(GameError::AlreadyPassed(seat));
        }

        match action {
            TurnAction::PlayCard { card, position } => {
                let is_politician = self.players[seat]
                    .hand()
                    .get(card)
                    .ok_or(GameError::CardNotInHand(card))?
                    .is_politician();
                if is_politician {
                    let position = position.ok_or(GameError::MissingPosition(card))?;
                    Self::check_row(seat, position)?;
                    self.play_politician(seat, card, position)?;
                } else {
                    self.play_action_card(seat, card)?;
                }
            }
            TurnAction::RetireCard { card } => {
                self.players[seat].retire_card(card)?;
                debug!(%seat, %card, "card retired from hand");
            }
            TurnAction::Pass => {
                self.players[seat].pass();
                info!(%seat, round = self.round, "player passed");
            }
        }

        let record = ActionRecord::new(seat, action, self.round, self.turn);
        self.history.push_back(record);
        if !action.is_pass() {
            self.fire_hooks(seat, HookKind::EndOfTurn, None);
            self.retire_defeated();
        }
        self.turn += 1;

        let round_result = if self.players.iter().all(|(_, p)| p.has_passed()) {
            Some(self.end_round())
        } else {
            None
        };

        let next_player = if self.is_over() {
            None
        } else {
            let next = match round_result {
                Some(_) => self.round_opener,
                None if self.players[seat.opponent()].has_passed() => seat,
                None => seat.opponent(),
            };
            self.begin_turn(next);
            Some(next)
        };

        Ok(TurnOutcome {
            record,
            round_result,
            next_player,
            game_result: self.result,
        })
    }

    /// Open `seat`'s turn: draw, then fire their permanent effects.
    pub(super) fn begin_turn(&mut self, seat: Seat) {
        self.active_player = seat;
        let drawn = self.draw_cards(seat, self.config.draws_per_turn);
        let fired = self.fire_hooks(seat, HookKind::Permanent, None);
        self.retire_defeated();
        debug!(%seat, turn = self.turn, drawn, fired, "turn started");
    }

    /// Score the round, clear the board, and set up the next round.
    fn end_round(&mut self) -> RoundResult {
        let scores = rules::score_rows(&self.board);
        let winner = rules::round_winner(&scores);
        match winner {
            Some(seat) => self.round_wins[seat] += 1,
            None => {
                for (_, wins) in self.round_wins.iter_mut() {
                    *wins += 1;
                }
            }
        }
        info!(
            round = self.round,
            one = scores[Seat::One],
            two = scores[Seat::Two],
            ?winner,
            "round scored"
        );

        let result = RoundResult {
            round: self.round,
            scores,
            winner,
        };
        self.round_results.push(result.clone());
        self.clear_board();

        if let Some(game_result) = self.check_victory() {
            self.finish(game_result);
        } else {
            self.round += 1;
            for (_, player) in self.players.iter_mut() {
                player.reset_pass();
            }
            // The round loser opens; after a tie the other seat opens.
            self.round_opener = match winner {
                Some(seat) => seat.opponent(),
                None => self.round_opener.opponent(),
            };
        }
        result
    }

    /// Retire every politician except those that run again.
    ///
    /// Politicians that stay gain their momentum as power.
    fn clear_board(&mut self) {
        let positions: Vec<Position> = self.board.occupied().map(|slot| slot.position()).collect();
        for position in positions {
            let slot = self.board.slot_at_mut(position);
            let stays = match slot.card_mut().and_then(|c| c.as_politician_mut()) {
                Some(politician) if politician.run_again => {
                    let momentum = politician.momentum;
                    politician.adjust_power(momentum);
                    true
                }
                _ => false,
            };
            if stays {
                continue;
            }
            if let Some(card) = slot.remove_card() {
                self.players[row_owner(position)].retirement_area_mut().add_card(card);
            }
        }
        self.retire_defeated();
    }

    fn check_row(seat: Seat, position: Position) -> Result<()> {
        if position.row() == seat.row() {
            Ok(())
        } else {
            warn!(%seat, row = position.row(), "cannot play into the opponent's row");
            Err(GameError::RowNotOwned {
                seat,
                row: position.row(),
            })
        }
    }
}

//! The `Game`: board, players, and everything that happens between them.
//!
//! This file holds the state and the card-level operations (playing,
//! triggering hooks, retiring, drawing). Turn sequencing lives in `turn.rs`.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::player::{PlayedCard, Player};
use crate::board::{Board, Position};
use crate::cards::{Card, HookKind};
use crate::core::{ActionRecord, CardId, GameConfig, GameError, GameRng, Result, Seat, SeatMap};
use crate::effects::{EffectContext, EffectResolver};
use crate::rules::{self, GameResult, RoundResult};
use crate::zones::CardZone;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created, decks can still be filled.
    Setup,
    InProgress,
    /// A result has been decided.
    Finished,
}

/// A two-player match on one board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) board: Board,
    pub(super) players: SeatMap<Player>,
    pub(super) active_player: Seat,
    /// Seat that acted first in the current round.
    pub(super) round_opener: Seat,
    pub(super) round: u32,
    pub(super) turn: u32,
    pub(super) phase: Phase,
    pub(super) round_wins: SeatMap<u32>,
    pub(super) round_results: Vec<RoundResult>,
    pub(super) result: Option<GameResult>,
    pub(super) history: Vector<ActionRecord>,
    pub(super) rng: GameRng,
}

/// The seat whose row contains `position`.
pub(super) fn row_owner(position: Position) -> Seat {
    if position.row() == Seat::One.row() {
        Seat::One
    } else {
        Seat::Two
    }
}

impl Game {
    /// Create a game for two named players.
    ///
    /// Both players are seated at a fresh board, seat one on row 1 and seat
    /// two on row 2. The starting seat is drawn from the seeded RNG.
    pub fn new(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        config: GameConfig,
    ) -> Result<Self> {
        config.validate()?;
        let board = Board::new();
        let mut players = SeatMap::from_pair(
            Player::new(Seat::One, player_one),
            Player::new(Seat::Two, player_two),
        );
        for (_, player) in players.iter_mut() {
            player.set_board(board.id());
        }

        let rng = GameRng::new(config.seed);
        let active_player = if rng.for_context("starting-seat").gen_bool(0.5) {
            Seat::One
        } else {
            Seat::Two
        };
        debug!(seed = config.seed, %active_player, "game created");

        Ok(Self {
            config,
            board,
            players,
            active_player,
            round_opener: active_player,
            round: 1,
            turn: 1,
            phase: Phase::Setup,
            round_wins: SeatMap::with_value(0),
            round_results: Vec::new(),
            result: None,
            history: Vector::new(),
            rng,
        })
    }

    // === Accessors ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat]
    }

    pub fn players(&self) -> &SeatMap<Player> {
        &self.players
    }

    /// Seat whose turn it is.
    pub fn active_player(&self) -> Seat {
        self.active_player
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Turns taken so far plus one; counts across rounds.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn round_wins(&self, seat: Seat) -> u32 {
        self.round_wins[seat]
    }

    /// Every scored round, oldest first.
    pub fn round_results(&self) -> &[RoundResult] {
        &self.round_results
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Every action taken, oldest first.
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Lifecycle ===

    /// Shuffle both decks, deal starting hands, and open the first turn.
    pub fn start(&mut self) -> Result<()> {
        match self.phase {
            Phase::Setup => {}
            Phase::InProgress => return Err(GameError::GameAlreadyStarted),
            Phase::Finished => return Err(GameError::GameOver),
        }

        for seat in Seat::ALL {
            self.players[seat].deck_mut().shuffle(&mut self.rng);
            let dealt = self.draw_cards(seat, self.config.starting_hand_size);
            debug!(%seat, dealt, "starting hand dealt");
        }

        self.phase = Phase::InProgress;
        self.round_opener = self.active_player;
        info!(
            one = self.players[Seat::One].name(),
            two = self.players[Seat::Two].name(),
            first = %self.active_player,
            "game started"
        );
        self.begin_turn(self.active_player);
        Ok(())
    }

    /// Decide the match if it is decided.
    ///
    /// A seat that reaches `rounds_to_win` round wins takes the match; both
    /// reaching it together is a draw. After `max_rounds` rounds the round
    /// wins decide. Returns `None` while the match is still open.
    pub fn check_victory(&self) -> Option<GameResult> {
        if self.result.is_some() {
            return self.result;
        }
        rules::decide(&self.round_wins, self.rounds_played(), &self.config)
    }

    /// Finish the game now and return the result.
    ///
    /// An undecided game is settled on round wins so far.
    pub fn end_game(&mut self) -> GameResult {
        if let Some(result) = self.result {
            return result;
        }
        let result = self
            .check_victory()
            .unwrap_or_else(|| rules::by_round_wins(&self.round_wins));
        self.finish(result);
        result
    }

    pub(super) fn finish(&mut self, result: GameResult) {
        self.phase = Phase::Finished;
        self.result = Some(result);
        info!(?result, rounds = self.rounds_played(), "game over");
    }

    pub(super) fn rounds_played(&self) -> u32 {
        u32::try_from(self.round_results.len()).unwrap_or(u32::MAX)
    }

    pub(super) fn ensure_in_progress(&self) -> Result<()> {
        match self.phase {
            Phase::Setup => Err(GameError::GameNotStarted),
            Phase::InProgress => Ok(()),
            Phase::Finished => Err(GameError::GameOver),
        }
    }

    // === Card operations ===

    /// Play an action card from `seat`'s hand and resolve its effect.
    ///
    /// Returns how many things the effect touched.
    pub fn play_action_card(&mut self, seat: Seat, card: CardId) -> Result<usize> {
        let held = self.hand_card(seat, card)?;
        if held.as_action().is_none() {
            return Err(GameError::NotAnAction { card });
        }

        let PlayedCard::Action(played) =
            self.players[seat].play_card(&mut self.board, card, None, None)?
        else {
            return Err(GameError::NotAnAction { card });
        };
        info!(%seat, %card, "action card played");

        // The card sits in no zone while its effect resolves.
        let effect = played.as_action().map(|a| a.effect.clone());
        let affected = effect.map_or(0, |effect| {
            EffectResolver::resolve(self, &effect, &EffectContext::off_board(card, seat))
        });
        self.players[seat].retire(played);
        self.notify_play(seat, card);
        self.retire_defeated();
        Ok(affected)
    }

    /// Play a politician from `seat`'s hand onto `position`.
    ///
    /// Fires its `OnPlay` hook, then the play reactions of the other
    /// politicians on the board.
    pub fn play_politician(&mut self, seat: Seat, card: CardId, position: Position) -> Result<()> {
        if !self.hand_card(seat, card)?.is_politician() {
            return Err(GameError::NotAPolitician { card });
        }

        self.players[seat].play_card(
            &mut self.board,
            card,
            Some(position.row()),
            Some(position.column()),
        )?;
        info!(%seat, %card, %position, "politician played");

        self.trigger_hook(position, HookKind::OnPlay)?;
        self.notify_play(seat, card);
        self.retire_defeated();
        Ok(())
    }

    /// Fire one hook of the politician at `position`.
    ///
    /// Returns `false` if the politician has no effect for that hook. The
    /// politician's controller is the owner of the row it sits in.
    pub fn trigger_hook(&mut self, position: Position, kind: HookKind) -> Result<bool> {
        let slot = self.board.slot_at(position);
        let card = slot.card().ok_or(GameError::SlotEmpty {
            row: position.row(),
            column: position.column(),
        })?;
        let politician = card
            .as_politician()
            .ok_or(GameError::NotAPolitician { card: card.id() })?;
        let Some(effect) = politician.hook(kind).cloned() else {
            return Ok(false);
        };

        let ctx = EffectContext::on_board(card.id(), row_owner(position), position);
        debug!(source = %ctx.source, ?kind, "hook fired");
        EffectResolver::resolve(self, &effect, &ctx);
        Ok(true)
    }

    /// Fire `kind` for every politician in `seat`'s row, left to right.
    ///
    /// A politician removed by an earlier effect in the sweep is skipped.
    /// Returns how many hooks fired.
    pub fn fire_hooks(&mut self, seat: Seat, kind: HookKind, except: Option<CardId>) -> usize {
        let sources: Vec<(Position, CardId)> = self
            .board
            .row_slots(seat.row())
            .filter_map(|slot| {
                slot.card()
                    .filter(|card| card.is_politician() && Some(card.id()) != except)
                    .map(|card| (slot.position(), card.id()))
            })
            .collect();

        let mut fired = 0;
        for (position, id) in sources {
            if self.board.slot_at(position).card().map(Card::id) != Some(id) {
                continue;
            }
            if let Ok(true) = self.trigger_hook(position, kind) {
                fired += 1;
            }
        }
        fired
    }

    /// Retire the politician at `position` if its power is below zero.
    ///
    /// The card goes to the retirement area of the row's owner.
    pub fn retire_if_defeated(&mut self, position: Position) -> Result<bool> {
        let slot = self.board.slot_at(position);
        let card = slot.card().ok_or(GameError::SlotEmpty {
            row: position.row(),
            column: position.column(),
        })?;
        let politician = card
            .as_politician()
            .ok_or(GameError::NotAPolitician { card: card.id() })?;
        if !politician.is_defeated() {
            return Ok(false);
        }

        let card = self.board.remove_card(position.row(), position.column())?;
        let owner = row_owner(position);
        info!(card = %card.id(), %position, %owner, "politician defeated");
        self.players[owner].retirement_area_mut().add_card(card);
        Ok(true)
    }

    /// Retire every defeated politician on the board. Returns their ids.
    pub fn retire_defeated(&mut self) -> Vec<CardId> {
        let defeated: Vec<(Position, CardId)> = self
            .board
            .occupied()
            .filter_map(|slot| {
                slot.card()
                    .filter(|card| card.as_politician().is_some_and(|p| p.is_defeated()))
                    .map(|card| (slot.position(), card.id()))
            })
            .collect();

        defeated
            .into_iter()
            .filter(|(position, _)| matches!(self.retire_if_defeated(*position), Ok(true)))
            .map(|(_, id)| id)
            .collect()
    }

    /// Draw up to `count` cards for `seat`.
    ///
    /// An empty deck is refilled from the retirement area first when the
    /// config allows it. Returns the number of cards drawn.
    pub fn draw_cards(&mut self, seat: Seat, count: usize) -> usize {
        let reshuffle = self.config.reshuffle_when_empty;
        let player = &mut self.players[seat];
        let mut drawn = 0;
        for _ in 0..count {
            if reshuffle && player.deck().is_empty() && !player.retirement_area().is_empty() {
                player.recycle_retirement(&mut self.rng);
            }
            if player.draw_card().is_none() {
                debug!(%seat, "deck is empty");
                break;
            }
            drawn += 1;
        }
        drawn
    }

    /// Shuffle `seat`'s retirement area back into their deck.
    pub fn recycle_retirement(&mut self, seat: Seat) -> usize {
        self.players[seat].recycle_retirement(&mut self.rng)
    }

    fn hand_card(&self, seat: Seat, card: CardId) -> Result<&Card> {
        self.players[seat].hand().get(card).ok_or_else(|| {
            warn!(%seat, %card, "card not in hand");
            GameError::CardNotInHand(card)
        })
    }

    /// Fire play reactions after `seat` played `card`.
    fn notify_play(&mut self, seat: Seat, card: CardId) {
        self.fire_hooks(seat, HookKind::OnFriendlyPlay, Some(card));
        self.fire_hooks(seat.opponent(), HookKind::OnOpponentPlay, None);
    }
}

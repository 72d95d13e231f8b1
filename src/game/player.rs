//! A participant and their zones.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Board, Position};
use crate::cards::{Card, CardKind};
use crate::core::{BoardId, CardId, GameError, GameRng, Result, Seat};
use crate::zones::{CardZone, Deck, Hand, RetirementArea};

/// What happened to a card played from hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayedCard {
    /// An action card left the hand and is held outside every zone until
    /// its effect resolves. Hand it back through [`Player::retire`].
    Action(Card),
    /// A politician now sits at `position`.
    Politician { card: CardId, position: Position },
}

/// One of the two players.
///
/// A player owns their deck, hand and retirement area, and holds a handle to
/// the board they sit at. Board operations take the board explicitly and
/// check it against that handle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    seat: Seat,
    name: String,
    owned_row: u8,
    deck: Deck,
    hand: Hand,
    retirement_area: RetirementArea,
    board: Option<BoardId>,
    has_passed: bool,
}

/// What a hand card needs before it can leave the hand.
enum PlayPlan {
    Action,
    Politician(Position),
}

impl Player {
    /// A player at `seat` with empty zones. The owned row follows the seat.
    pub fn new(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            owned_row: seat.row(),
            deck: Deck::new(),
            hand: Hand::new(),
            retirement_area: RetirementArea::new(),
            board: None,
            has_passed: false,
        }
    }

    /// Replace the deck (builder pattern).
    #[must_use]
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Board row this player controls (1 or 2).
    pub fn owned_row(&self) -> u8 {
        self.owned_row
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn retirement_area(&self) -> &RetirementArea {
        &self.retirement_area
    }

    pub fn retirement_area_mut(&mut self) -> &mut RetirementArea {
        &mut self.retirement_area
    }

    /// Handle of the board this player sits at.
    pub fn board(&self) -> Option<BoardId> {
        self.board
    }

    pub fn has_passed(&self) -> bool {
        self.has_passed
    }

    /// Seat this player at `board`.
    pub fn set_board(&mut self, board: BoardId) {
        self.board = Some(board);
    }

    /// Move the top card of the deck into the hand.
    ///
    /// Returns `None` and changes nothing when the deck is empty.
    pub fn draw_card(&mut self) -> Option<CardId> {
        let card = self.deck.draw_card()?;
        let id = card.id();
        self.hand.add_card(card);
        Some(id)
    }

    /// Play a card from hand.
    ///
    /// An action card goes to the retirement area and its effect is handed
    /// back for the caller to resolve. A politician needs both `row` and
    /// `column` and is placed on the board. Every check runs before the card
    /// leaves the hand, so a rejected play changes nothing.
    pub fn play_card(
        &mut self,
        board: &mut Board,
        card: CardId,
        row: Option<u8>,
        column: Option<u8>,
    ) -> Result<PlayedCard> {
        self.check_board(board)?;
        let held = self.hand.get(card).ok_or_else(|| {
            warn!(player = %self.name, %card, "card not in hand");
            GameError::CardNotInHand(card)
        })?;

        let plan = match held.kind() {
            CardKind::Action(_) => PlayPlan::Action,
            CardKind::Politician(politician) => {
                let (Some(row), Some(column)) = (row, column) else {
                    warn!(player = %self.name, %card, "row and column must be specified for politician cards");
                    return Err(GameError::MissingPosition(card));
                };
                let position = Position::new(row, column)?;
                let slot = board.slot_at(position);
                if !slot.is_empty() {
                    return Err(GameError::SlotOccupied { row, column });
                }
                if !politician.can_occupy(slot.lane()) {
                    warn!(player = %self.name, %card, lane = %slot.lane(), "card cannot be played in this lane");
                    return Err(GameError::LaneNotAllowed {
                        card,
                        lane: slot.lane(),
                    });
                }
                PlayPlan::Politician(position)
            }
        };

        let played = self.hand.play_card(card)?;
        match plan {
            PlayPlan::Action => {
                debug!(player = %self.name, %card, "action card played");
                Ok(PlayedCard::Action(played))
            }
            PlayPlan::Politician(position) => {
                board.add_card(position.row(), position.column(), played)?;
                debug!(player = %self.name, %card, %position, "politician played");
                Ok(PlayedCard::Politician { card, position })
            }
        }
    }

    /// Move a card from hand straight to the retirement area.
    pub fn retire_card(&mut self, card: CardId) -> Result<()> {
        let retired = self.hand.play_card(card)?;
        self.retirement_area.add_card(retired);
        Ok(())
    }

    /// Put a card that is in no zone into the retirement area.
    pub fn retire(&mut self, card: Card) {
        self.retirement_area.add_card(card);
    }

    /// Shuffle the retirement area back into the deck.
    pub fn recycle_retirement(&mut self, rng: &mut GameRng) -> usize {
        self.retirement_area.shuffle_back_into_deck(&mut self.deck, rng)
    }

    /// Stop acting for the rest of the round.
    pub fn pass(&mut self) {
        self.has_passed = true;
    }

    /// Clear the passed flag at the start of a round.
    pub fn reset_pass(&mut self) {
        self.has_passed = false;
    }

    fn check_board(&self, board: &Board) -> Result<()> {
        if self.board == Some(board.id()) {
            Ok(())
        } else {
            Err(GameError::BoardMismatch {
                expected: self.board,
                actual: board.id(),
            })
        }
    }
}

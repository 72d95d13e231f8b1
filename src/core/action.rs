//! Turn actions and the history log.
//!
//! A turn is exactly one `TurnAction`: play a card, retire a card from hand,
//! or pass for the rest of the round.

use serde::{Deserialize, Serialize};

use super::entity::CardId;
use super::player::Seat;
use crate::board::Position;

/// What the active player does with their turn.
///
/// ```
/// use politics_ccg::board::Position;
/// use politics_ccg::core::{CardId, TurnAction};
///
/// let card = CardId(4);
/// let play = TurnAction::play_at(card, Position::new(1, 5).unwrap());
///
/// assert_eq!(play.card(), Some(card));
/// assert_eq!(TurnAction::Pass.card(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnAction {
    /// Play a card from hand. Politicians need a position; actions don't.
    PlayCard {
        card: CardId,
        position: Option<Position>,
    },
    /// Put a card from hand straight into the retirement area.
    RetireCard { card: CardId },
    /// Stop acting for the rest of the round.
    Pass,
}

impl TurnAction {
    /// Play a card that needs no position.
    #[must_use]
    pub fn play(card: CardId) -> Self {
        TurnAction::PlayCard {
            card,
            position: None,
        }
    }

    /// Play a card at a board position.
    #[must_use]
    pub fn play_at(card: CardId, position: Position) -> Self {
        TurnAction::PlayCard {
            card,
            position: Some(position),
        }
    }

    #[must_use]
    pub fn retire(card: CardId) -> Self {
        TurnAction::RetireCard { card }
    }

    /// The card this action uses, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            TurnAction::PlayCard { card, .. } | TurnAction::RetireCard { card } => Some(*card),
            TurnAction::Pass => None,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, TurnAction::Pass)
    }
}

/// A recorded action with its place in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub seat: Seat,

    pub action: TurnAction,

    /// Round number when the action was taken.
    pub round: u32,

    /// Turn number when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(seat: Seat, action: TurnAction, round: u32, turn: u32) -> Self {
        Self {
            seat,
            action,
            round,
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_card() {
        let id = CardId(9);
        assert_eq!(TurnAction::play(id).card(), Some(id));
        assert_eq!(TurnAction::retire(id).card(), Some(id));
        assert!(TurnAction::Pass.is_pass());
        assert!(!TurnAction::play(id).is_pass());
    }

    #[test]
    fn test_action_json_shape() {
        let json = serde_json::to_string(&TurnAction::retire(CardId(2))).unwrap();
        assert_eq!(json, r#"{"retire_card":{"card":2}}"#);
        assert_eq!(serde_json::to_string(&TurnAction::Pass).unwrap(), r#""pass""#);
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(Seat::Two, TurnAction::Pass, 2, 7);

        assert_eq!(record.seat, Seat::Two);
        assert_eq!(record.action, TurnAction::Pass);
        assert_eq!(record.round, 2);
        assert_eq!(record.turn, 7);
    }
}

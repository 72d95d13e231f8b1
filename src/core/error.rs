//! Error type shared by every operation in the crate.
//!
//! Variants fall in three families:
//! - **invalid operation**: the move is not legal in the current state
//!   (card not in hand, slot taken, not your turn, ...)
//! - **unsupported type**: content names a card type the factory can't build
//! - **invalid configuration value**: a lane label, coordinate, seat or
//!   config field outside its domain

use crate::board::Lane;

use super::entity::{BoardId, CardId};
use super::player::Seat;

/// Errors surfaced by card, zone, board, player and game operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    // === Invalid operation ===
    #[error("{0} is not in hand")]
    CardNotInHand(CardId),

    #[error("{0} not found")]
    CardNotFound(CardId),

    #[error("row and column must be specified for politician {0}")]
    MissingPosition(CardId),

    #[error("slot ({row}, {column}) is already occupied")]
    SlotOccupied { row: u8, column: u8 },

    #[error("slot ({row}, {column}) is empty")]
    SlotEmpty { row: u8, column: u8 },

    #[error("{card} cannot be played in the {lane} lane")]
    LaneNotAllowed { card: CardId, lane: Lane },

    #[error("{seat} does not control row {row}")]
    RowNotOwned { seat: Seat, row: u8 },

    #[error("{card} is not a politician")]
    NotAPolitician { card: CardId },

    #[error("{card} is not an action card")]
    NotAnAction { card: CardId },

    #[error("it is not {0}'s turn")]
    NotYourTurn(Seat),

    #[error("{0} has already passed this round")]
    AlreadyPassed(Seat),

    #[error("game has not started")]
    GameNotStarted,

    #[error("game has already started")]
    GameAlreadyStarted,

    #[error("game is over")]
    GameOver,

    #[error("player is seated at {expected:?}, not {actual}")]
    BoardMismatch {
        expected: Option<BoardId>,
        actual: BoardId,
    },

    // === Unsupported type ===
    #[error("unknown card type: {0}")]
    UnsupportedCardType(String),

    // === Invalid configuration value ===
    #[error("invalid slot value {0:?}; must be 'Left', 'Center', or 'Right'")]
    InvalidLane(String),

    #[error("position ({row}, {column}) is off the board")]
    InvalidPosition { row: u8, column: u8 },

    #[error("invalid seat {0}; must be 1 or 2")]
    InvalidSeat(u8),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid card content: {0}")]
    Content(String),
}

impl GameError {
    /// True for errors caused by an illegal move rather than bad data.
    #[must_use]
    pub const fn is_invalid_operation(&self) -> bool {
        !matches!(
            self,
            Self::UnsupportedCardType(_)
                | Self::InvalidLane(_)
                | Self::InvalidPosition { .. }
                | Self::InvalidSeat(_)
                | Self::InvalidConfig(_)
                | Self::Content(_)
        )
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        Self::Content(err.to_string())
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(GameError::CardNotInHand(CardId(1)).is_invalid_operation());
        assert!(GameError::SlotOccupied { row: 1, column: 1 }.is_invalid_operation());
        assert!(GameError::NotYourTurn(Seat::One).is_invalid_operation());
        assert!(!GameError::InvalidLane("Up".into()).is_invalid_operation());
        assert!(!GameError::UnsupportedCardType("spell".into()).is_invalid_operation());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::CardNotInHand(CardId(3)).to_string(),
            "Card(3) is not in hand"
        );
        assert_eq!(
            GameError::InvalidLane("Up".into()).to_string(),
            "invalid slot value \"Up\"; must be 'Left', 'Center', or 'Right'"
        );
        assert_eq!(
            GameError::UnsupportedCardType("spell".into()).to_string(),
            "unknown card type: spell"
        );
    }
}

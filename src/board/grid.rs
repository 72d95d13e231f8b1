//! The 2×9 board.
//!
//! All 18 slots exist from construction and are never removed. Placement
//! and removal are addressed by `(row, column)`; coordinates off the grid
//! are reported as `GameError::InvalidPosition`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::slot::{Position, Slot};
use crate::cards::Card;
use crate::core::{BoardId, CardId, GameError, Result};

/// Slots adjacent to a cell (never more than three).
pub type Neighbors<'a> = SmallVec<[&'a Slot; 3]>;

/// Fixed grid of slots shared by both players.
///
/// ```
/// use politics_ccg::board::Board;
///
/// let board = Board::new();
/// let friends: Vec<_> = board.get_friendly_neighbors(1, 1).unwrap()
///     .iter().map(|s| (s.row(), s.column())).collect();
/// assert_eq!(friends, vec![(1, 2)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    id: BoardId,
    /// Row-major: index `(row - 1) * 9 + (column - 1)`.
    slots: Vec<Slot>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with all 18 slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: BoardId::fresh(),
            slots: Position::all().map(Slot::new).collect(),
        }
    }

    /// The handle players use to refer to this board.
    #[must_use]
    pub fn id(&self) -> BoardId {
        self.id
    }

    /// Get the slot at `(row, column)`.
    pub fn slot(&self, row: u8, column: u8) -> Result<&Slot> {
        Ok(self.slot_at(Position::new(row, column)?))
    }

    /// Get the slot at `(row, column)` mutably.
    pub fn slot_mut(&mut self, row: u8, column: u8) -> Result<&mut Slot> {
        Ok(self.slot_at_mut(Position::new(row, column)?))
    }

    /// Get the slot at a validated position.
    #[must_use]
    pub fn slot_at(&self, position: Position) -> &Slot {
        &self.slots[position.index()]
    }

    /// Get the slot at a validated position mutably.
    pub fn slot_at_mut(&mut self, position: Position) -> &mut Slot {
        &mut self.slots[position.index()]
    }

    /// True when `(row, column)` is on the board and empty.
    #[must_use]
    pub fn is_available(&self, row: u8, column: u8) -> bool {
        self.slot(row, column).map(Slot::is_empty).unwrap_or(false)
    }

    /// Place a card in an empty slot.
    ///
    /// Fails with `SlotOccupied` when the slot holds a card (which stays in
    /// place) or `InvalidPosition` when the coordinate is off the board.
    pub fn add_card(&mut self, row: u8, column: u8, card: Card) -> Result<()> {
        let slot = self.slot_mut(row, column)?;
        if !slot.is_empty() {
            return Err(GameError::SlotOccupied { row, column });
        }
        debug!(card = %card.id(), row, column, "card placed on board");
        slot.set_card(card);
        Ok(())
    }

    /// Take the card out of an occupied slot.
    pub fn remove_card(&mut self, row: u8, column: u8) -> Result<Card> {
        let card = self
            .slot_mut(row, column)?
            .remove_card()
            .ok_or(GameError::SlotEmpty { row, column })?;
        debug!(card = %card.id(), row, column, "card removed from board");
        Ok(card)
    }

    /// The 1-2 slots beside `(row, column)` in the same row.
    pub fn get_friendly_neighbors(&self, row: u8, column: u8) -> Result<Neighbors<'_>> {
        let position = Position::new(row, column)?;
        Ok(position
            .friendly_neighbors()
            .into_iter()
            .map(|p| self.slot_at(p))
            .collect())
    }

    /// The single slot directly across in the other row.
    pub fn get_opponent_neighbors(&self, row: u8, column: u8) -> Result<Neighbors<'_>> {
        let position = Position::new(row, column)?;
        let mut out = Neighbors::new();
        out.push(self.slot_at(position.opposite()));
        Ok(out)
    }

    /// Friendly neighbors followed by the opposing slot.
    pub fn get_neighbors(&self, row: u8, column: u8) -> Result<Neighbors<'_>> {
        let mut neighbors = self.get_friendly_neighbors(row, column)?;
        neighbors.extend(self.get_opponent_neighbors(row, column)?);
        Ok(neighbors)
    }

    /// Relabel the lane of the slot at `(row, column)`.
    pub fn change_slot_value(&mut self, row: u8, column: u8, label: &str) -> Result<()> {
        self.slot_mut(row, column)?.change_slot_value(label)
    }

    /// All slots, row by row.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// The nine slots of one row.
    pub fn row_slots(&self, row: u8) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(move |s| s.row() == row)
    }

    /// Summed score of the politicians in `row`. Operatives count zero.
    #[must_use]
    pub fn row_power(&self, row: u8) -> i64 {
        self.row_slots(row)
            .filter_map(|s| s.card().and_then(Card::as_politician))
            .map(|p| p.score())
            .sum()
    }

    /// Slots currently holding a card.
    pub fn occupied(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|s| !s.is_empty())
    }

    /// Where a card currently sits, if it is on the board.
    #[must_use]
    pub fn find_card(&self, card: CardId) -> Option<Position> {
        self.occupied()
            .find(|s| s.card().is_some_and(|c| c.id() == card))
            .map(Slot::position)
    }
}

/// Serialized form: the board is rebuilt from its slots after checking that
/// every grid cell is present exactly once, in order.
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    id: BoardId,
    slots: Vec<Slot>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let expected = Position::all().count();
        if repr.slots.len() != expected
            || !repr.slots.iter().zip(Position::all()).all(|(s, p)| s.position() == p)
        {
            return Err(GameError::Content(format!(
                "board must list all {expected} slots in row-major order"
            )));
        }
        Ok(Self {
            id: repr.id,
            slots: repr.slots,
        })
    }
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            slots: board.slots,
        }
    }
}

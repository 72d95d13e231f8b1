//! Board coordinates, lanes and slots.
//!
//! ## Lane layout
//!
//! Each row is split into three lanes of three columns. Row 2 is mirrored so
//! that lanes face each other across the board:
//!
//! ```text
//!            col 1-3   col 4-6   col 7-9
//! row 1       Left     Center    Right
//! row 2       Right    Center    Left
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{GameError, Result};

/// Number of rows on the board.
pub const ROWS: u8 = 2;
/// Number of columns in each row.
pub const COLUMNS: u8 = 9;

/// One of the three lanes a slot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Center,
    Right,
}

impl Lane {
    /// All lanes, left to right from row 1's point of view.
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    /// The lane a slot starts with.
    #[must_use]
    pub fn for_position(position: Position) -> Self {
        match (position.row, position.column) {
            (1, 1..=3) | (2, 7..=9) => Lane::Left,
            (_, 4..=6) => Lane::Center,
            _ => Lane::Right,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Lane::Left => "Left",
            Lane::Center => "Center",
            Lane::Right => "Right",
        }
    }
}

impl std::str::FromStr for Lane {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Left" => Ok(Lane::Left),
            "Center" => Ok(Lane::Center),
            "Right" => Ok(Lane::Right),
            other => Err(GameError::InvalidLane(other.to_string())),
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated board coordinate in {1,2} × [1..9].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    column: u8,
}

#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    column: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = GameError;

    fn try_from(raw: RawPosition) -> Result<Self> {
        Position::new(raw.row, raw.column)
    }
}

impl Position {
    /// Validate a coordinate.
    pub fn new(row: u8, column: u8) -> Result<Self> {
        if (1..=ROWS).contains(&row) && (1..=COLUMNS).contains(&column) {
            Ok(Self { row, column })
        } else {
            Err(GameError::InvalidPosition { row, column })
        }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// The slot directly across, in the other row.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self {
            row: 3 - self.row,
            column: self.column,
        }
    }

    /// Adjacent slots in the same row, clamped at the edges.
    #[must_use]
    pub fn friendly_neighbors(self) -> SmallVec<[Position; 2]> {
        let mut out = SmallVec::new();
        if self.column > 1 {
            out.push(Self {
                row: self.row,
                column: self.column - 1,
            });
        }
        if self.column < COLUMNS {
            out.push(Self {
                row: self.row,
                column: self.column + 1,
            });
        }
        out
    }

    /// Every position on the board, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=ROWS).flat_map(|row| (1..=COLUMNS).map(move |column| Position { row, column }))
    }

    /// Every position in one row.
    pub fn in_row(row: u8) -> impl Iterator<Item = Position> {
        (1..=COLUMNS).map(move |column| Position { row, column })
    }

    pub(crate) const fn index(self) -> usize {
        (self.row as usize - 1) * COLUMNS as usize + (self.column as usize - 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// One addressable board cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    position: Position,
    lane: Lane,
    card: Option<Card>,
}

impl Slot {
    /// Create an empty slot with its default lane.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            lane: Lane::for_position(position),
            card: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn row(&self) -> u8 {
        self.position.row
    }

    #[must_use]
    pub fn column(&self) -> u8 {
        self.position.column
    }

    #[must_use]
    pub fn lane(&self) -> Lane {
        self.lane
    }

    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn card_mut(&mut self) -> Option<&mut Card> {
        self.card.as_mut()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }

    /// Put a card in the slot, returning whatever was there.
    pub fn set_card(&mut self, card: Card) -> Option<Card> {
        self.card.replace(card)
    }

    /// Take the card out of the slot.
    pub fn remove_card(&mut self) -> Option<Card> {
        self.card.take()
    }

    /// Relabel the slot's lane.
    pub fn set_lane(&mut self, lane: Lane) {
        self.lane = lane;
    }

    /// Relabel the slot's lane from a text label.
    pub fn change_slot_value(&mut self, label: &str) -> Result<()> {
        self.lane = label.parse()?;
        Ok(())
    }
}

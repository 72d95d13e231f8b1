//! Seats and per-seat data storage.
//!
//! ## Seat
//!
//! The game always has exactly two seats, keyed 1 and 2. Seat one controls
//! board row 1, seat two controls row 2.
//!
//! ## SeatMap
//!
//! Fixed two-entry storage indexed by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::{GameError, Result};

/// One of the two player seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Both seats, in key order.
    pub const ALL: [Seat; 2] = [Seat::One, Seat::Two];

    /// Look up a seat by its key (1 or 2).
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Seat::One),
            2 => Ok(Seat::Two),
            other => Err(GameError::InvalidSeat(other)),
        }
    }

    /// The seat's key: 1 or 2.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// The board row this seat controls.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.number()
    }

    /// The seat controlling `row`.
    pub fn from_row(row: u8) -> Result<Self> {
        Self::from_number(row)
    }

    const fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.number())
    }
}

/// Per-seat data storage.
///
/// ```
/// use politics_ccg::core::{Seat, SeatMap};
///
/// let mut wins: SeatMap<u32> = SeatMap::with_value(0);
/// wins[Seat::Two] += 1;
/// assert_eq!(wins[Seat::One], 0);
/// assert_eq!(wins[Seat::Two], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::One), factory(Seat::Two)],
        }
    }

    /// Create a map from seat one's and seat two's values.
    pub const fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Take the values out as `[seat one, seat two]`.
    pub fn into_inner(self) -> [T; 2] {
        self.data
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Mutable access to both entries at once.
    pub fn both_mut(&mut self) -> (&mut T, &mut T) {
        let [one, two] = &mut self.data;
        (one, two)
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

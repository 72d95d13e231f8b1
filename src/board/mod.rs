//! Board system: lanes, coordinates, slots and the 2×9 grid.
//!
//! ## Key Types
//!
//! - `Position`: validated `(row, column)` coordinate
//! - `Lane`: Left / Center / Right label of a slot
//! - `Slot`: one cell, holding at most one card
//! - `Board`: all 18 slots plus neighbor queries

mod grid;
mod slot;

pub use grid::{Board, Neighbors};
pub use slot::{Lane, Position, Slot, COLUMNS, ROWS};

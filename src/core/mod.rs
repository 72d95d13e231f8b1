//! Core types: identities, seats, actions, RNG, configuration, errors.
//!
//! Everything else in the crate is built from these.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionRecord, TurnAction};
pub use config::GameConfig;
pub use entity::{BoardId, CardId};
pub use error::{GameError, Result};
pub use player::{Seat, SeatMap};
pub use rng::{GameRng, GameRngState};

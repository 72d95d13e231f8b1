//! Players and the game that seats them.
//!
//! ## Key Types
//!
//! - `Player`: a seat's name, owned row, and zones
//! - `Game`: board, both players, turn and round state
//! - `GameBuilder`: names, decks, and config before the game starts
//! - `TurnOutcome`: result of one `Game::play_turn`
//!
//! ## Turn Structure
//!
//! `Game::start` shuffles both decks and deals starting hands. Each turn
//! opens with the active player drawing and their permanent effects firing.
//! The player then plays a card, retires one from hand, or passes. When both
//! players have passed the round is scored and the next round begins, until
//! a player reaches the configured number of round wins.

mod builder;
mod engine;
mod player;
mod turn;

pub use builder::GameBuilder;
pub use engine::{Game, Phase};
pub use player::{PlayedCard, Player};
pub use turn::TurnOutcome;

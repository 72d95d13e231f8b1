//! # politics-ccg
//!
//! Domain model for a two-player political card game.
//!
//! ## Overview
//!
//! Players build decks of **politicians** and **action cards**. Politicians
//! are placed on a 2×9 board, one row per player, split into Left, Center
//! and Right lanes. Action cards resolve an effect and go straight to the
//! retirement area. A round is won by the player whose row holds more power.
//!
//! ## Design Principles
//!
//! 1. **Identity, Not Value**: every card has a unique `CardId`; two cards
//!    with identical printed data are still two cards.
//!
//! 2. **Effects Are Data**: card abilities are `Effect` values, loadable from
//!    JSON and resolved against the `Game` by `EffectResolver`.
//!
//! 3. **Errors Are Values**: every illegal move returns a `GameError` and
//!    leaves the game unchanged.
//!
//! 4. **Deterministic**: all shuffles and the starting seat come from a
//!    seeded `GameRng`, so a seed and an action list replay a game exactly.
//!
//! ## Modules
//!
//! - `core`: Card and board ids, seats, actions, RNG, config, errors
//! - `cards`: Card data, politicians, the factory and the library
//! - `effects`: Effect data, targeting, and resolution
//! - `zones`: Deck, hand, and retirement area
//! - `board`: Slots, lanes, and the 2×9 grid
//! - `game`: Players, the game, and turn flow
//! - `rules`: Round scoring and victory

pub mod board;
pub mod cards;
pub mod core;
pub mod effects;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, BoardId, CardId, GameConfig, GameError, GameRng, GameRngState, Result, Seat,
    SeatMap, TurnAction,
};

pub use crate::board::{Board, Lane, Position, Slot};

pub use crate::cards::{
    ActionCard, Card, CardFactory, CardInfo, CardKind, CardLibrary, CardSpec, CardType, Faction,
    HookKind, PoliticianCard, Rarity,
};

pub use crate::effects::{Effect, EffectContext, EffectResolver, Target};

pub use crate::zones::{CardZone, Deck, Hand, RetirementArea};

pub use crate::game::{Game, GameBuilder, Phase, PlayedCard, Player, TurnOutcome};

pub use crate::rules::{GameResult, RoundResult};

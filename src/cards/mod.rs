//! Card system: printed data, card kinds, factory, and library.
//!
//! ## Key Types
//!
//! - `CardInfo`: printed metadata (names, factions, rarity, tags)
//! - `Card`: a physical card with a unique `CardId` and a `CardKind`
//! - `ActionCard`: one-shot effect, retired after it resolves
//! - `PoliticianCard`: board piece with power, momentum, and effect hooks
//! - `CardFactory`: builds cards from a type tag and JSON attributes
//! - `CardLibrary`: named card descriptions for building decks
//!
//! ## Identity
//!
//! Two cards are equal only if they are the same card. Copies minted from
//! the same description are distinct.

pub mod attributes;
pub mod definition;
pub mod factory;
pub mod instance;
pub mod library;
pub mod politician;

pub use attributes::{Faction, Rarity};
pub use definition::CardInfo;
pub use factory::{CardFactory, CardSpec, CardType};
pub use instance::{ActionCard, Card, CardKind};
pub use library::CardLibrary;
pub use politician::{HookKind, PoliticianCard, PoliticianHooks};

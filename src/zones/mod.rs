//! Card zones: the ordered containers a player manages.
//!
//! ## Key Types
//!
//! - `CardZone`: shared add/remove/shuffle/count behaviour
//! - `Deck`: draw pile, drawn from the top (end)
//! - `Hand`: held cards, played by identity
//! - `RetirementArea`: discard pile, can be shuffled back into a deck

mod deck;
mod hand;
mod retirement;
mod zone;

pub use deck::Deck;
pub use hand::Hand;
pub use retirement::RetirementArea;
pub use zone::CardZone;

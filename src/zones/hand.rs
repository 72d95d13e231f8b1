//! Cards a player holds.

use serde::{Deserialize, Serialize};

use super::zone::CardZone;
use crate::cards::Card;
use crate::core::{CardId, GameError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a specific card out of the hand to play it.
    pub fn play_card(&mut self, card: CardId) -> Result<Card> {
        self.remove_card(card).ok_or(GameError::CardNotInHand(card))
    }
}

impl CardZone for Hand {
    fn zone_name(&self) -> &'static str {
        "hand"
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

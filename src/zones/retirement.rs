//! Discard pile for spent and defeated cards.

use serde::{Deserialize, Serialize};

use super::deck::Deck;
use super::zone::CardZone;
use crate::cards::Card;
use crate::core::GameRng;

/// Where cards go when they leave play.
///
/// Cards keep their arrival order here; the pile is only randomized when it
/// is shuffled back into a deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementArea {
    cards: Vec<Card>,
}

impl RetirementArea {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move every retired card into `deck`, then shuffle the deck.
    ///
    /// Returns the number of cards moved.
    pub fn shuffle_back_into_deck(&mut self, deck: &mut Deck, rng: &mut GameRng) -> usize {
        let moved = self.cards.len();
        deck.cards_mut().append(&mut self.cards);
        deck.shuffle(rng);
        tracing::debug!(moved, deck_size = deck.count(), "retirement shuffled into deck");
        moved
    }
}

impl CardZone for RetirementArea {
    fn zone_name(&self) -> &'static str {
        "retirement"
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::test_support::politician;

    #[test]
    fn test_shuffle_back_into_deck() {
        let mut deck: Deck = (0..3).map(|i| politician("Deck", i)).collect();
        let mut retirement = RetirementArea::new();
        for i in 0..4 {
            retirement.add_card(politician("Retired", i));
        }
        let retired_ids = retirement.card_ids();

        let moved = retirement.shuffle_back_into_deck(&mut deck, &mut GameRng::new(1));

        assert_eq!(moved, 4);
        assert_eq!(deck.count(), 7);
        assert!(retirement.is_empty());
        assert!(retired_ids.iter().all(|&id| deck.contains(id)));
    }

    #[test]
    fn test_shuffle_back_empty_area() {
        let mut deck: Deck = (0..2).map(|i| politician("Deck", i)).collect();
        let mut retirement = RetirementArea::new();

        assert_eq!(retirement.shuffle_back_into_deck(&mut deck, &mut GameRng::new(1)), 0);
        assert_eq!(deck.count(), 2);
    }
}

//! Draw pile. The top of the deck is the end of the sequence.

use serde::{Deserialize, Serialize};

use super::zone::CardZone;
use crate::cards::Card;

/// A player's draw pile.
///
/// ```
/// use politics_ccg::cards::{Card, CardInfo, PoliticianCard};
/// use politics_ccg::zones::{CardZone, Deck};
///
/// let mut deck = Deck::new();
/// let a = Card::politician(CardInfo::new("a", "A"), PoliticianCard::new(1));
/// let b = Card::politician(CardInfo::new("b", "B"), PoliticianCard::new(1));
/// let b_id = b.id();
/// deck.add_card(a);
/// deck.add_card(b);
///
/// assert_eq!(deck.draw_card().map(|c| c.id()), Some(b_id));
/// assert_eq!(deck.count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the top card, or `None` when the deck is empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Look at the top card without drawing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl CardZone for Deck {
    fn zone_name(&self) -> &'static str {
        "deck"
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
    use crate::core::GameRng;

    #[test]
    fn test_draw_order_is_reverse_of_arrival() {
        let (a, b, c) = (politician("A", 1), politician("B", 2), politician("C", 3));
        let ids = [a.id(), b.id(), c.id()];
        let mut deck: Deck = vec![a, b, c].into();

        assert_eq!(deck.top().map(Card::id), Some(ids[2]));
        assert_eq!(deck.draw_card().map(|c| c.id()), Some(ids[2]));
        assert_eq!(deck.draw_card().map(|c| c.id()), Some(ids[1]));
        assert_eq!(deck.draw_card().map(|c| c.id()), Some(ids[0]));
        assert!(deck.draw_card().is_none());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_remove_by_identity() {
        let a = politician("Twin", 1);
        let b = politician("Twin", 1);
        let b_id = b.id();
        let mut deck: Deck = [a.clone(), b].into_iter().collect();

        let removed = deck.remove_card(b_id).unwrap();
        assert_eq!(removed.id(), b_id);
        assert_eq!(deck.card_ids(), vec![a.id()]);
        assert!(deck.remove_card(b_id).is_none());
        assert_eq!(deck.count(), 1);
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut deck: Deck = (0..20).map(|i| politician("Card", i)).collect();
        let mut before = deck.card_ids();

        deck.shuffle(&mut GameRng::new(42));
        let mut after = deck.card_ids();

        assert_ne!(before, after);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }
}

//! Shared behaviour of ordered card containers.
//!
//! Every zone is an ordered sequence of cards in arrival order. Lookup and
//! removal go by `CardId`, so a zone never confuses two cards that happen to
//! share printed data. Zones do not stop a card from being in two zones at
//! once; callers move cards, they don't copy them.

use crate::cards::Card;
use crate::core::{CardId, GameRng};

/// An ordered container of cards.
///
/// Implementors only provide storage access; the operations are shared.
pub trait CardZone {
    /// Zone name for diagnostics.
    fn zone_name(&self) -> &'static str;

    /// Cards in arrival order (index 0 arrived first).
    fn cards(&self) -> &[Card];

    /// Mutable access to the underlying sequence.
    fn cards_mut(&mut self) -> &mut Vec<Card>;

    /// Append a card at the end.
    fn add_card(&mut self, card: Card) {
        tracing::debug!(zone = self.zone_name(), card = %card.id(), "card added");
        self.cards_mut().push(card);
    }

    /// Remove a card by identity. Returns `None` if it isn't here.
    fn remove_card(&mut self, card: CardId) -> Option<Card> {
        let index = self.cards().iter().position(|c| c.id() == card)?;
        tracing::debug!(zone = self.zone_name(), %card, "card removed");
        Some(self.cards_mut().remove(index))
    }

    #[must_use]
    fn contains(&self, card: CardId) -> bool {
        self.cards().iter().any(|c| c.id() == card)
    }

    #[must_use]
    fn get(&self, card: CardId) -> Option<&Card> {
        self.cards().iter().find(|c| c.id() == card)
    }

    /// Randomize the order uniformly.
    fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards_mut());
    }

    #[must_use]
    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    #[must_use]
    fn count(&self) -> usize {
        self.cards().len()
    }

    /// Ids of the cards in order.
    #[must_use]
    fn card_ids(&self) -> Vec<CardId> {
        self.cards().iter().map(Card::id).collect()
    }
}

//! Cards with identity.
//!
//! A `Card` is a `CardId` plus its printed `CardInfo` plus what kind of card
//! it is. Equality and hashing look only at the id: two cards printed from
//! the same data are different cards, while a clone of a card is the same
//! card (it refers to the same physical piece).

use serde::{Deserialize, Serialize};

use super::attributes::Faction;
use super::definition::CardInfo;
use super::politician::PoliticianCard;
use crate::core::CardId;
use crate::effects::Effect;

/// One-shot card: its effect fires once when played, then it retires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCard {
    pub effect: Effect,
}

impl ActionCard {
    #[must_use]
    pub fn new(effect: Effect) -> Self {
        Self { effect }
    }
}

/// The closed set of card kinds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardKind {
    Action(ActionCard),
    Politician(PoliticianCard),
}

/// A physical card.
///
/// ```
/// use politics_ccg::cards::{Card, CardInfo, PoliticianCard};
///
/// let a = Card::politician(CardInfo::new("aide", "Aide"), PoliticianCard::new(1));
/// let b = Card::politician(CardInfo::new("aide", "Aide"), PoliticianCard::new(1));
///
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "CardRecord")]
pub struct Card {
    id: CardId,
    info: CardInfo,
    kind: CardKind,
}

/// Serialized form of a `Card`; restoring one normalizes its info.
#[derive(Deserialize)]
struct CardRecord {
    id: CardId,
    info: CardInfo,
    kind: CardKind,
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        let CardRecord { id, mut info, kind } = record;
        info.normalize();
        Self { id, info, kind }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Card {
    /// Create a card with a fresh identity.
    #[must_use]
    pub fn new(mut info: CardInfo, kind: CardKind) -> Self {
        info.normalize();
        Self {
            id: CardId::fresh(),
            info,
            kind,
        }
    }

    /// Create an action card.
    #[must_use]
    pub fn action(info: CardInfo, effect: Effect) -> Self {
        Self::new(info, CardKind::Action(ActionCard::new(effect)))
    }

    /// Create a politician card.
    #[must_use]
    pub fn politician(info: CardInfo, politician: PoliticianCard) -> Self {
        Self::new(info, CardKind::Politician(politician))
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn info(&self) -> &CardInfo {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut CardInfo {
        &mut self.info
    }

    #[must_use]
    pub fn kind(&self) -> &CardKind {
        &self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    #[must_use]
    pub fn print_name(&self) -> &str {
        &self.info.print_name
    }

    #[must_use]
    pub fn belongs_to_faction(&self, faction: Faction) -> bool {
        self.info.belongs_to_faction(faction)
    }

    /// Add a tag unless already present. Returns true if it was new.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        self.info.add_tag(tag)
    }

    #[must_use]
    pub fn as_action(&self) -> Option<&ActionCard> {
        match &self.kind {
            CardKind::Action(action) => Some(action),
            CardKind::Politician(_) => None,
        }
    }

    #[must_use]
    pub fn as_politician(&self) -> Option<&PoliticianCard> {
        match &self.kind {
            CardKind::Politician(politician) => Some(politician),
            CardKind::Action(_) => None,
        }
    }

    pub fn as_politician_mut(&mut self) -> Option<&mut PoliticianCard> {
        match &mut self.kind {
            CardKind::Politician(politician) => Some(politician),
            CardKind::Action(_) => None,
        }
    }

    #[must_use]
    pub fn is_politician(&self) -> bool {
        matches!(self.kind, CardKind::Politician(_))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.info.print_name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rarity;

    fn sample_info() -> CardInfo {
        CardInfo::new("rally", "Campaign Rally")
            .with_faction(Faction::Republicans)
            .with_rarity(Rarity::Common)
    }

    #[test]
    fn test_identity_equality() {
        let a = Card::action(sample_info(), Effect::draw(1));
        let b = Card::action(sample_info(), Effect::draw(1));

        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.info(), b.info());
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_identity_hashing() {
        use std::collections::HashSet;

        let a = Card::action(sample_info(), Effect::draw(1));
        let b = Card::action(sample_info(), Effect::draw(1));

        let set: HashSet<Card> = [a.clone(), b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_kind_accessors() {
        let action = Card::action(sample_info(), Effect::draw(2));
        assert!(action.as_action().is_some());
        assert!(action.as_politician().is_none());
        assert!(!action.is_politician());

        let mut senator = Card::politician(CardInfo::new("sen", "Senator"), PoliticianCard::new(3));
        assert!(senator.is_politician());
        senator.as_politician_mut().unwrap().adjust_power(2);
        assert_eq!(senator.as_politician().unwrap().power, 5);
    }

    #[test]
    fn test_tags_and_factions() {
        let mut card = Card::action(sample_info(), Effect::draw(1));
        assert!(card.belongs_to_faction(Faction::Republicans));
        assert!(!card.belongs_to_faction(Faction::Democrats));
        assert!(card.add_tag("viral"));
        assert!(!card.add_tag("viral"));
        assert_eq!(card.info().tags(), ["viral"]);
    }

    #[test]
    fn test_serialization_keeps_identity() {
        let card = Card::politician(CardInfo::new("gov", "Governor"), PoliticianCard::new(4));
        let json = serde_json::to_string(&card).unwrap();
        let restored: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, restored);
        assert_eq!(restored.as_politician().unwrap().power, 4);
    }

    #[test]
    fn test_restored_card_drops_duplicates() {
        let card = Card::action(sample_info(), Effect::draw(1));
        let mut value = serde_json::to_value(&card).unwrap();
        value["info"]["tags"] = serde_json::json!(["viral", "viral", "local"]);
        value["info"]["factions"] = serde_json::json!(["republicans", "democrats", "republicans"]);

        let restored: Card = serde_json::from_value(value).unwrap();

        assert_eq!(restored, card);
        assert_eq!(restored.info().tags(), ["viral", "local"]);
        assert_eq!(restored.info().factions, [Faction::Republicans, Faction::Democrats]);
    }
}

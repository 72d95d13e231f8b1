//! Building cards from a type tag and loose attributes.
//!
//! Content files describe cards as JSON objects: a `"type"` tag, the printed
//! `CardInfo` fields, and the stats of that card type, all at one level.
//!
//! ```
//! use politics_ccg::cards::CardFactory;
//!
//! let cards = CardFactory::from_json(r#"[
//!     {"type": "politician", "name": "mayor", "print_name": "The Mayor", "power": 3},
//!     {"type": "action", "name": "rally", "print_name": "Rally",
//!      "effect": {"draw_cards": {"count": 2}}}
//! ]"#).unwrap();
//!
//! assert_eq!(cards.len(), 2);
//! assert!(cards[0].is_politician());
//! assert!(cards[1].as_action().is_some());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::definition::CardInfo;
use super::instance::{ActionCard, Card, CardKind};
use super::politician::PoliticianCard;
use crate::core::{GameError, Result};

/// The card types the factory can build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Action,
    Politician,
}

impl CardType {
    /// Parse a type tag. Only `"action"` and `"politician"` are known.
    pub fn parse(tag: &str) -> Result<Self> {
        match tag {
            "action" => Ok(CardType::Action),
            "politician" => Ok(CardType::Politician),
            other => Err(GameError::UnsupportedCardType(other.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Action => "action",
            CardType::Politician => "politician",
        }
    }
}

impl std::str::FromStr for CardType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card description without identity.
///
/// Each call to `instantiate` mints a new, distinct card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    pub info: CardInfo,
    pub kind: CardKind,
}

impl CardSpec {
    #[must_use]
    pub fn new(info: CardInfo, kind: CardKind) -> Self {
        Self { info, kind }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        match self.kind {
            CardKind::Action(_) => CardType::Action,
            CardKind::Politician(_) => CardType::Politician,
        }
    }

    /// Mint a card with a fresh identity.
    #[must_use]
    pub fn instantiate(&self) -> Card {
        Card::new(self.info.clone(), self.kind.clone())
    }
}

/// Dispatches on a card type tag to build cards.
pub struct CardFactory;

impl CardFactory {
    /// Build one card of type `card_type`.
    ///
    /// `attributes` holds the type-specific fields (`effect` for actions;
    /// `power`, `momentum`, `hooks` and so on for politicians). Unknown
    /// fields are ignored.
    pub fn create_card(card_type: &str, info: CardInfo, attributes: Value) -> Result<Card> {
        Ok(Self::create_spec(card_type, info, attributes)?.instantiate())
    }

    /// Like `create_card`, but keeps the description for later minting.
    pub fn create_spec(card_type: &str, info: CardInfo, attributes: Value) -> Result<CardSpec> {
        let kind = match CardType::parse(card_type)? {
            CardType::Action => CardKind::Action(serde_json::from_value::<ActionCard>(attributes)?),
            CardType::Politician => {
                CardKind::Politician(serde_json::from_value::<PoliticianCard>(attributes)?)
            }
        };
        Ok(CardSpec::new(info, kind))
    }

    /// Parse one flat JSON card object.
    pub fn spec_from_value(value: Value) -> Result<CardSpec> {
        let Value::Object(mut fields) = value else {
            return Err(GameError::Content("card entry is not an object".to_string()));
        };
        let card_type = match fields.remove("type") {
            Some(Value::String(tag)) => tag,
            Some(_) => return Err(GameError::Content("card `type` must be a string".to_string())),
            None => return Err(GameError::Content("card entry has no `type`".to_string())),
        };
        let info: CardInfo = serde_json::from_value(Value::Object(fields.clone()))?;
        Self::create_spec(&card_type, info, Value::Object(fields))
    }

    /// Parse a JSON array of card objects into descriptions.
    pub fn specs_from_json(json: &str) -> Result<Vec<CardSpec>> {
        let entries: Vec<Value> = serde_json::from_str(json)?;
        entries.into_iter().map(Self::spec_from_value).collect()
    }

    /// Parse a JSON array of card objects into cards.
    pub fn from_json(json: &str) -> Result<Vec<Card>> {
        let cards: Vec<Card> = Self::specs_from_json(json)?
            .iter()
            .map(CardSpec::instantiate)
            .collect();
        tracing::debug!(count = cards.len(), "cards loaded");
        Ok(cards)
    }
}

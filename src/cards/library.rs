//! Card library for lookup by name and deck building.
//!
//! The `CardLibrary` stores card descriptions under their internal name.
//! Building a deck mints a fresh card for every copy requested.

use rustc_hash::FxHashMap;

use super::factory::{CardFactory, CardSpec};
use crate::core::{GameError, Result};
use crate::zones::Deck;

/// Named card descriptions.
///
/// ## Example
///
/// ```
/// use politics_ccg::cards::{CardInfo, CardKind, CardLibrary, CardSpec, PoliticianCard};
/// use politics_ccg::zones::CardZone;
///
/// let mut library = CardLibrary::new();
/// library.register(CardSpec::new(
///     CardInfo::new("mayor", "The Mayor"),
///     CardKind::Politician(PoliticianCard::new(3)),
/// )).unwrap();
///
/// let deck = library.build_deck(&[("mayor", 4)]).unwrap();
/// assert_eq!(deck.count(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardLibrary {
    specs: FxHashMap<String, CardSpec>,
}

impl CardLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every card in a JSON content array.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut library = Self::new();
        for spec in CardFactory::specs_from_json(json)? {
            library.register(spec)?;
        }
        Ok(library)
    }

    /// Register a description under its internal name.
    ///
    /// Names must be unique within a library.
    pub fn register(&mut self, spec: CardSpec) -> Result<()> {
        if self.specs.contains_key(spec.name()) {
            return Err(GameError::Content(format!("duplicate card name `{}`", spec.name())));
        }
        self.specs.insert(spec.name().to_string(), spec);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardSpec> {
        self.specs.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterate over all descriptions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardSpec> {
        self.specs.values()
    }

    /// Build a deck from `(name, copies)` pairs, in list order.
    pub fn build_deck(&self, list: &[(&str, usize)]) -> Result<Deck> {
        let mut cards = Vec::with_capacity(list.iter().map(|(_, n)| n).sum());
        for &(name, copies) in list {
            let spec = self
                .get(name)
                .ok_or_else(|| GameError::Content(format!("unknown card `{name}`")))?;
            cards.extend((0..copies).map(|_| spec.instantiate()));
        }
        Ok(Deck::from(cards))
    }
}

//! Descriptive card data.
//!
//! `CardInfo` is what is printed on a card: names, factions, rarity, art and
//! rules text, plus a list of free-form tags that effects may add during
//! play. It carries no identity; see `Card` for that.

use serde::{Deserialize, Serialize};

use super::attributes::{Faction, Rarity};

/// Printed metadata of a card.
///
/// ```
/// use politics_ccg::cards::{CardInfo, Faction, Rarity};
///
/// let mut info = CardInfo::new("gov_smith", "Governor Smith")
///     .with_faction(Faction::Democrats)
///     .with_rarity(Rarity::Rare);
///
/// info.add_tag("incumbent");
/// info.add_tag("incumbent");
///
/// assert!(info.belongs_to_faction(Faction::Democrats));
/// assert_eq!(info.tags(), ["incumbent"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardInfo {
    /// Internal name used for lookup.
    pub name: String,

    /// Name shown on the card.
    pub print_name: String,

    /// Factions the card belongs to (no duplicates).
    pub factions: Vec<Faction>,

    pub rarity: Rarity,

    /// Image reference (URL or asset path).
    pub image: String,

    /// Rules text.
    pub description: String,

    tags: Vec<String>,
}

impl CardInfo {
    /// Create card info with just names; everything else defaults.
    #[must_use]
    pub fn new(name: impl Into<String>, print_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            print_name: print_name.into(),
            ..Self::default()
        }
    }

    /// Add a faction (builder pattern). Duplicates are ignored.
    #[must_use]
    pub fn with_faction(mut self, faction: Faction) -> Self {
        if !self.factions.contains(&faction) {
            self.factions.push(faction);
        }
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check faction membership.
    #[must_use]
    pub fn belongs_to_faction(&self, faction: Faction) -> bool {
        self.factions.contains(&faction)
    }

    /// Add a tag unless the card already has it.
    ///
    /// Returns true if the tag was new.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Tags in the order they were added.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Drop duplicate factions and tags, keeping first occurrences.
    pub(crate) fn normalize(&mut self) {
        let mut seen_factions = Vec::with_capacity(self.factions.len());
        self.factions.retain(|f| {
            let fresh = !seen_factions.contains(f);
            seen_factions.push(*f);
            fresh
        });

        let mut seen_tags: Vec<String> = Vec::with_capacity(self.tags.len());
        self.tags.retain(|t| {
            let fresh = !seen_tags.contains(t);
            seen_tags.push(t.clone());
            fresh
        });
    }
}

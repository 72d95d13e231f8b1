//! Identity handles for cards and boards.
//!
//! Cards are compared by identity, never by printed data. Every constructed
//! card draws a fresh `CardId` from a process-wide counter, so two cards with
//! identical fields are still two different cards.
//!
//! ```
//! use politics_ccg::core::CardId;
//!
//! let a = CardId::fresh();
//! let b = CardId::fresh();
//! assert_ne!(a, b);
//! ```
//!
//! `BoardId` plays the same role for boards: players hold one as a
//! non-owning handle to the board they sit at.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_CARD_ID: AtomicU32 = AtomicU32::new(1);
static NEXT_BOARD_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of a single physical card.
///
/// Deserializing an id moves the counter past it, so cards minted after a
/// snapshot is restored never collide with restored cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32")]
pub struct CardId(pub u32);

impl CardId {
    /// Allocate a new, never-before-seen card identity.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(raw: u32) -> Self {
        NEXT_CARD_ID.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
        Self(raw)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Handle to a board owned by a `Game`.
///
/// Restored handles advance the counter the same way `CardId` does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u64")]
pub struct BoardId(pub u64);

impl BoardId {
    /// Allocate a new board handle.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_BOARD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl From<u64> for BoardId {
    fn from(raw: u64) -> Self {
        NEXT_BOARD_ID.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
        Self(raw)
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.0)
    }
}

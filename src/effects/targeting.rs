//! Target selection for board effects.
//!
//! Targets are described relative to the source card: its position and its
//! controller's row. A source that is not on the board (an action card) has
//! no position, so position-relative targets select nothing for it.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Lane, Position};
use crate::core::{CardId, Seat};

/// Which slots an effect applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The source card's own slot.
    Source,
    /// Slots beside the source in its row.
    FriendlyNeighbors,
    /// The slot directly across from the source.
    OpponentNeighbors,
    /// Friendly neighbors and the opposing slot.
    Neighbors,
    /// Every slot of the controller's row.
    FriendlyRow,
    /// Every slot of the opponent's row.
    OpponentRow,
    /// Every slot, in both rows, currently labelled with this lane.
    Lane(Lane),
}

/// Who is applying an effect, and from where.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectContext {
    /// Card whose effect is resolving.
    pub source: CardId,
    /// Player controlling the source.
    pub controller: Seat,
    /// Board position of the source, if it is on the board.
    pub position: Option<Position>,
}

impl EffectContext {
    /// Context for a card that is not on the board.
    #[must_use]
    pub fn off_board(source: CardId, controller: Seat) -> Self {
        Self {
            source,
            controller,
            position: None,
        }
    }

    /// Context for a card sitting at `position`.
    #[must_use]
    pub fn on_board(source: CardId, controller: Seat, position: Position) -> Self {
        Self {
            source,
            controller,
            position: Some(position),
        }
    }
}

impl Target {
    /// Positions selected by this target, in board order.
    #[must_use]
    pub fn resolve(&self, board: &Board, context: &EffectContext) -> Vec<Position> {
        match self {
            Target::Source => context.position.into_iter().collect(),
            Target::FriendlyNeighbors => context
                .position
                .map(|p| p.friendly_neighbors().into_vec())
                .unwrap_or_default(),
            Target::OpponentNeighbors => context.position.map(|p| vec![p.opposite()]).unwrap_or_default(),
            Target::Neighbors => context
                .position
                .map(|p| {
                    let mut out = p.friendly_neighbors().into_vec();
                    out.push(p.opposite());
                    out
                })
                .unwrap_or_default(),
            Target::FriendlyRow => Position::in_row(context.controller.row()).collect(),
            Target::OpponentRow => Position::in_row(context.controller.opponent().row()).collect(),
            Target::Lane(lane) => board
                .slots()
                .filter(|s| s.lane() == *lane)
                .map(|s| s.position())
                .collect(),
        }
    }
}

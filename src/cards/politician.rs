//! Politician cards: persistent board pieces.
//!
//! A politician has stats (`power`, `momentum`), placement rules
//! (`allowed_positions`), two flags (`run_again`, `operative`) and up to five
//! optional effect hooks. An absent hook is a valid state and fires nothing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Lane;
use crate::effects::Effect;

/// The moments at which a politician's effects can fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKind {
    /// When the politician itself is played.
    OnPlay,
    /// At the end of each of its controller's turns.
    EndOfTurn,
    /// At the start of each of its controller's turns.
    Permanent,
    /// When its controller plays another card.
    OnFriendlyPlay,
    /// When the opponent plays a card.
    OnOpponentPlay,
}

impl HookKind {
    pub const ALL: [HookKind; 5] = [
        HookKind::OnPlay,
        HookKind::EndOfTurn,
        HookKind::Permanent,
        HookKind::OnFriendlyPlay,
        HookKind::OnOpponentPlay,
    ];
}

/// Optional effects bound to each hook.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoliticianHooks {
    pub on_play: Option<Effect>,
    pub end_of_turn: Option<Effect>,
    pub permanent: Option<Effect>,
    pub on_friendly_play: Option<Effect>,
    pub on_opponent_play: Option<Effect>,
}

impl PoliticianHooks {
    /// The effect bound to `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: HookKind) -> Option<&Effect> {
        match kind {
            HookKind::OnPlay => self.on_play.as_ref(),
            HookKind::EndOfTurn => self.end_of_turn.as_ref(),
            HookKind::Permanent => self.permanent.as_ref(),
            HookKind::OnFriendlyPlay => self.on_friendly_play.as_ref(),
            HookKind::OnOpponentPlay => self.on_opponent_play.as_ref(),
        }
    }

    /// Bind or clear the effect for `kind`.
    pub fn set(&mut self, kind: HookKind, effect: Option<Effect>) {
        let slot = match kind {
            HookKind::OnPlay => &mut self.on_play,
            HookKind::EndOfTurn => &mut self.end_of_turn,
            HookKind::Permanent => &mut self.permanent,
            HookKind::OnFriendlyPlay => &mut self.on_friendly_play,
            HookKind::OnOpponentPlay => &mut self.on_opponent_play,
        };
        *slot = effect;
    }
}

fn all_lanes() -> SmallVec<[Lane; 3]> {
    SmallVec::from_slice(&Lane::ALL)
}

/// Stats and hooks of a politician.
///
/// ```
/// use politics_ccg::board::Lane;
/// use politics_ccg::cards::{HookKind, PoliticianCard};
/// use politics_ccg::effects::{Effect, Target};
///
/// let whip = PoliticianCard::new(3)
///     .with_allowed_positions([Lane::Center])
///     .with_hook(HookKind::OnPlay, Effect::modify_power(Target::FriendlyNeighbors, 1));
///
/// assert!(whip.can_occupy(Lane::Center));
/// assert!(!whip.can_occupy(Lane::Left));
/// assert!(whip.hook(HookKind::OnPlay).is_some());
/// assert!(whip.hook(HookKind::EndOfTurn).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliticianCard {
    /// Contribution to the row score. Below zero the politician retires.
    pub power: i32,

    /// Power gained when the politician runs again in a new round.
    #[serde(default)]
    pub momentum: i32,

    /// Stays on the board across a round end.
    #[serde(default)]
    pub run_again: bool,

    /// Lanes this politician may be placed in.
    #[serde(default = "all_lanes")]
    pub allowed_positions: SmallVec<[Lane; 3]>,

    /// Operatives work behind the scenes: their effects fire, but their
    /// power does not count toward the row score.
    #[serde(default)]
    pub operative: bool,

    #[serde(default)]
    pub hooks: PoliticianHooks,
}

impl PoliticianCard {
    /// A politician with the given power, allowed in every lane.
    #[must_use]
    pub fn new(power: i32) -> Self {
        Self {
            power,
            momentum: 0,
            run_again: false,
            allowed_positions: all_lanes(),
            operative: false,
            hooks: PoliticianHooks::default(),
        }
    }

    #[must_use]
    pub fn with_momentum(mut self, momentum: i32) -> Self {
        self.momentum = momentum;
        self
    }

    #[must_use]
    pub fn with_run_again(mut self, run_again: bool) -> Self {
        self.run_again = run_again;
        self
    }

    /// Restrict placement to the given lanes.
    #[must_use]
    pub fn with_allowed_positions(mut self, lanes: impl IntoIterator<Item = Lane>) -> Self {
        self.allowed_positions.clear();
        for lane in lanes {
            if !self.allowed_positions.contains(&lane) {
                self.allowed_positions.push(lane);
            }
        }
        self
    }

    #[must_use]
    pub fn with_operative(mut self, operative: bool) -> Self {
        self.operative = operative;
        self
    }

    #[must_use]
    pub fn with_hook(mut self, kind: HookKind, effect: Effect) -> Self {
        self.hooks.set(kind, Some(effect));
        self
    }

    /// May this politician be placed in `lane`?
    #[must_use]
    pub fn can_occupy(&self, lane: Lane) -> bool {
        self.allowed_positions.contains(&lane)
    }

    #[must_use]
    pub fn hook(&self, kind: HookKind) -> Option<&Effect> {
        self.hooks.get(kind)
    }

    /// Power below zero: the politician must leave the board.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.power < 0
    }

    /// Power counted toward the row score.
    #[must_use]
    pub fn score(&self) -> i64 {
        if self.operative {
            0
        } else {
            i64::from(self.power)
        }
    }

    pub fn adjust_power(&mut self, delta: i32) {
        self.power = self.power.saturating_add(delta);
    }

    pub fn adjust_momentum(&mut self, delta: i32) {
        self.momentum = self.momentum.saturating_add(delta);
    }
}

//! Effect definitions.
//!
//! Effects are plain data, so cards carrying them can be cloned, compared and
//! loaded from JSON. The `EffectResolver` gives them meaning against a game.

use serde::{Deserialize, Serialize};

use super::targeting::Target;
use crate::board::Lane;

/// An effect a card can apply.
///
/// ## Board Effects
///
/// Resolved against the slots picked by a `Target`; empty slots and action
/// cards are skipped:
/// - `ModifyPower`: add `delta` to each targeted politician's power
/// - `ModifyMomentum`: add `delta` to each targeted politician's momentum
/// - `AddTag`: tag each targeted card
/// - `ChangeLane`: relabel each targeted slot
///
/// ## Player Effects
///
/// Apply to the controller of the source card:
/// - `DrawCards`: draw from deck to hand
/// - `RecycleRetirement`: shuffle the retirement area back into the deck
///
/// ## Composite
///
/// - `Batch`: apply several effects in order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    ModifyPower { target: Target, delta: i32 },

    ModifyMomentum { target: Target, delta: i32 },

    AddTag { target: Target, tag: String },

    ChangeLane { target: Target, lane: Lane },

    DrawCards { count: usize },

    RecycleRetirement,

    Batch(Vec<Effect>),
}

impl Effect {
    /// Draw `count` cards for the controller.
    pub fn draw(count: usize) -> Self {
        Self::DrawCards { count }
    }

    pub fn modify_power(target: Target, delta: i32) -> Self {
        Self::ModifyPower { target, delta }
    }

    pub fn modify_momentum(target: Target, delta: i32) -> Self {
        Self::ModifyMomentum { target, delta }
    }

    pub fn add_tag(target: Target, tag: impl Into<String>) -> Self {
        Self::AddTag {
            target,
            tag: tag.into(),
        }
    }

    pub fn change_lane(target: Target, lane: Lane) -> Self {
        Self::ChangeLane { target, lane }
    }

    /// Combine effects, flattening nested batches.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        let mut flat = Vec::new();
        for effect in effects {
            match effect {
                Self::Batch(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        Self::Batch(flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Effect::draw(2), Effect::DrawCards { count: 2 });
        assert_eq!(
            Effect::modify_power(Target::Neighbors, -1),
            Effect::ModifyPower {
                target: Target::Neighbors,
                delta: -1
            }
        );
    }

    #[test]
    fn test_batch_flattens() {
        let inner = Effect::batch([Effect::draw(1), Effect::RecycleRetirement]);
        let outer = Effect::batch([inner, Effect::draw(2)]);

        assert_eq!(
            outer,
            Effect::Batch(vec![
                Effect::draw(1),
                Effect::RecycleRetirement,
                Effect::draw(2)
            ])
        );
    }

    #[test]
    fn test_json_shape() {
        let effect = Effect::modify_power(Target::Lane(Lane::Center), 2);
        let json = serde_json::to_string(&effect).unwrap();
        assert_eq!(
            json,
            r#"{"modify_power":{"target":{"lane":"Center"},"delta":2}}"#
        );

        let parsed: Effect = serde_json::from_str(r#""recycle_retirement""#).unwrap();
        assert_eq!(parsed, Effect::RecycleRetirement);
    }
}

//! Effect resolution - executing effects against a game.
//!
//! The resolver never holds a borrow of the card that produced an effect.
//! Callers clone the effect out of the card and pass an `EffectContext`
//! naming the source by id, which leaves the game free to be mutated.

use tracing::debug;

use crate::game::Game;

use super::{Effect, EffectContext};

/// Applies effects to a game.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `effect` and return how many things it touched.
    ///
    /// Slot-targeted effects count affected slots; draw and recycle effects
    /// count moved cards. Targets that don't apply (empty slots, positions
    /// with no politician) are skipped without error.
    pub fn resolve(game: &mut Game, effect: &Effect, ctx: &EffectContext) -> usize {
        let affected = match effect {
            Effect::ModifyPower { target, delta } => {
                let positions = target.resolve(game.board(), ctx);
                let mut affected = 0;
                for position in positions {
                    let slot = game.board_mut().slot_at_mut(position);
                    if let Some(politician) = slot.card_mut().and_then(|c| c.as_politician_mut()) {
                        politician.adjust_power(*delta);
                        affected += 1;
                    }
                }
                affected
            }

            Effect::ModifyMomentum { target, delta } => {
                let positions = target.resolve(game.board(), ctx);
                let mut affected = 0;
                for position in positions {
                    let slot = game.board_mut().slot_at_mut(position);
                    if let Some(politician) = slot.card_mut().and_then(|c| c.as_politician_mut()) {
                        politician.adjust_momentum(*delta);
                        affected += 1;
                    }
                }
                affected
            }

            Effect::AddTag { target, tag } => {
                let positions = target.resolve(game.board(), ctx);
                let mut affected = 0;
                for position in positions {
                    if let Some(card) = game.board_mut().slot_at_mut(position).card_mut() {
                        card.add_tag(tag.clone());
                        affected += 1;
                    }
                }
                affected
            }

            Effect::ChangeLane { target, lane } => {
                let positions = target.resolve(game.board(), ctx);
                for &position in &positions {
                    game.board_mut().slot_at_mut(position).set_lane(*lane);
                }
                positions.len()
            }

            Effect::DrawCards { count } => game.draw_cards(ctx.controller, *count),

            Effect::RecycleRetirement => game.recycle_retirement(ctx.controller),

            Effect::Batch(effects) => effects
                .iter()
                .map(|inner| Self::resolve(game, inner, ctx))
                .sum(),
        };

        debug!(source = %ctx.source, controller = %ctx.controller, ?effect, affected, "effect resolved");
        affected
    }
}

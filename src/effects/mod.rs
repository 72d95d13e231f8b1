//! Effect system for card abilities.
//!
//! Effects are plain data:
//! - `Effect`: what happens (power changes, tags, lane relabels, draws)
//! - `Target`: which slots it happens to, relative to the source card
//! - `EffectContext`: the source card, its controller, and its position
//! - `EffectResolver`: applies an effect to a `Game`
//!
//! Keeping effects as data lets cards be loaded from content files and
//! compared, cloned, and serialized like any other card field.

mod effect;
mod resolver;
mod targeting;

pub use effect::Effect;
pub use resolver::EffectResolver;
pub use targeting::{EffectContext, Target};

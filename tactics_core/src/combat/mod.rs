//! Combat resolution - Apply incoming damage against defensive flags

mod resolution;
mod result;

pub use resolution::{resolve_damage, resolve_damage_with_rng};
pub use result::{DamageOutcome, DamageReport};

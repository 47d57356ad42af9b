//! Ability - Immutable description of a combat move

use crate::types::{RestoreKind, SpecialKind};
use serde::{Deserialize, Serialize};

/// A move a combatant can take during a round.
///
/// Abilities are catalog data: constructed once (from TOML or fixtures) and
/// never mutated. Special behavior is carried by the `special` tag rather
/// than the display name, so the engine never matches on free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
    /// EP deducted when the ability is used
    #[serde(default)]
    pub ep_cost: u32,
    /// Damage dealt to the opponent
    #[serde(default)]
    pub damage: u32,
    /// Amount restored to the user, routed by `restore_kind`
    #[serde(default)]
    pub restore_amount: u32,
    #[serde(default)]
    pub restore_kind: Option<RestoreKind>,
    /// Set for shield/evade style abilities the engine dispatches on
    #[serde(default)]
    pub special: Option<SpecialKind>,
}

impl Ability {
    /// Whether this ability carries a special semantic tag
    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }

    /// One-line menu entry: name, EP cost, description
    pub fn menu_line(&self) -> String {
        format!("{} (EP: {}) - {}", self.name, self.ep_cost, self.description)
    }
}

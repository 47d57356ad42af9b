//! MagicItem - Equippable and consumable items with rarity tiers

use crate::types::Rarity;
use serde::{Deserialize, Serialize};

/// A magic item a combatant can hold in their inventory.
///
/// Single-use items are consumed on activation; passive items provide
/// continuous effects while equipped. The rarity tier drives the reward
/// draw, not any in-battle behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagicItem {
    pub name: String,
    pub description: String,
    /// Short effect text shown in inventory listings
    pub effect: String,
    pub rarity: Rarity,
    pub kind: ItemKind,
}

/// Kind-specific payload of a magic item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// Consumed when activated
    SingleUse {
        #[serde(default)]
        hp_restore: u32,
        #[serde(default)]
        ep_restore: u32,
        /// Negates all incoming damage for the current round
        #[serde(default)]
        shields_all_damage: bool,
    },
    /// Continuous effects while equipped
    Passive {
        #[serde(default)]
        max_hp_bonus: u32,
        #[serde(default)]
        max_ep_bonus: u32,
        /// HP regained at the start of each round; 0 means none
        #[serde(default)]
        heal_per_turn: u32,
        /// EP regained at the start of each round; 0 means none
        #[serde(default)]
        ep_per_turn: u32,
    },
}

impl MagicItem {
    pub fn is_single_use(&self) -> bool {
        matches!(self.kind, ItemKind::SingleUse { .. })
    }

    pub fn is_passive(&self) -> bool {
        matches!(self.kind, ItemKind::Passive { .. })
    }

    /// Max HP / max EP bonuses granted while equipped (0 for single-use items)
    pub fn stat_bonuses(&self) -> (u32, u32) {
        match self.kind {
            ItemKind::Passive {
                max_hp_bonus,
                max_ep_bonus,
                ..
            } => (max_hp_bonus, max_ep_bonus),
            ItemKind::SingleUse { .. } => (0, 0),
        }
    }

    /// Per-round (heal, EP) regeneration granted while equipped
    pub fn per_turn_effects(&self) -> (u32, u32) {
        match self.kind {
            ItemKind::Passive {
                heal_per_turn,
                ep_per_turn,
                ..
            } => (heal_per_turn, ep_per_turn),
            ItemKind::SingleUse { .. } => (0, 0),
        }
    }

    /// Activation label shown in inventory listings
    pub fn activation_label(&self) -> &'static str {
        if self.is_single_use() {
            "Single-Use"
        } else {
            "Passive"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_use_item() {
        let toml = r#"
name = "Potion of Minor Healing"
description = "A basic potion that restores a small amount of health."
effect = "Heals the user for 40 HP"
rarity = "common"

[kind]
type = "single_use"
hp_restore = 40
"#;
        let item: MagicItem = toml::from_str(toml).unwrap();
        assert!(item.is_single_use());
        assert_eq!(item.rarity, Rarity::Common);
        match item.kind {
            ItemKind::SingleUse {
                hp_restore,
                ep_restore,
                shields_all_damage,
            } => {
                assert_eq!(hp_restore, 40);
                assert_eq!(ep_restore, 0);
                assert!(!shields_all_damage);
            }
            _ => panic!("expected single-use payload"),
        }
    }

    #[test]
    fn test_parse_passive_item() {
        let toml = r#"
name = "Ancient Tome of Power"
description = "A worn book filled with forgotten wisdom."
effect = "Additional +5 EP at the start of each turn"
rarity = "rare"

[kind]
type = "passive"
ep_per_turn = 5
"#;
        let item: MagicItem = toml::from_str(toml).unwrap();
        assert!(item.is_passive());
        assert_eq!(item.stat_bonuses(), (0, 0));
        assert_eq!(item.per_turn_effects(), (0, 5));
    }

    #[test]
    fn test_stat_bonuses_for_single_use_are_zero() {
        let item = MagicItem {
            name: "Defender's Aegis".to_string(),
            description: "A small, temporary barrier that absorbs damage.".to_string(),
            effect: "Negates all incoming damage".to_string(),
            rarity: Rarity::Common,
            kind: ItemKind::SingleUse {
                hp_restore: 0,
                ep_restore: 0,
                shields_all_damage: true,
            },
        };
        assert_eq!(item.stat_bonuses(), (0, 0));
        assert_eq!(item.per_turn_effects(), (0, 0));
        assert_eq!(item.activation_label(), "Single-Use");
    }
}

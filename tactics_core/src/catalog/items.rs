//! Magic item catalog - items grouped by rarity tier

use super::CatalogError;
use crate::item::{ItemKind, MagicItem};
use crate::types::Rarity;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container matching the TOML file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemsConfig {
    #[serde(rename = "item")]
    items: Vec<MagicItem>,
}

/// All known magic items, in catalog order. Rarity tiers partition the
/// catalog; an empty tier is legal (the reward draw then grants nothing
/// for that tier).
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    items: Vec<MagicItem>,
}

impl ItemCatalog {
    /// Build a catalog from already-constructed items (fixtures)
    pub fn from_items(items: Vec<MagicItem>) -> Self {
        ItemCatalog { items }
    }

    /// Parse a catalog from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let config: ItemsConfig = super::parse_toml(content)?;
        Ok(Self::from_items(config.items))
    }

    /// Load a catalog from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, CatalogError> {
        let config: ItemsConfig = super::load_toml(path)?;
        Ok(Self::from_items(config.items))
    }

    /// All items in catalog order
    pub fn all_items(&self) -> &[MagicItem] {
        &self.items
    }

    /// Items belonging to one rarity tier, in catalog order
    pub fn items_in_tier(&self, tier: Rarity) -> Vec<&MagicItem> {
        self.items.iter().filter(|i| i.rarity == tier).collect()
    }

    /// Look up an item by name (case-insensitive)
    pub fn item_by_name(&self, name: &str) -> Option<&MagicItem> {
        self.items
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(name))
    }

    /// All single-use items
    pub fn single_use_items(&self) -> Vec<&MagicItem> {
        self.items.iter().filter(|i| i.is_single_use()).collect()
    }

    /// All passive items
    pub fn passive_items(&self) -> Vec<&MagicItem> {
        self.items.iter().filter(|i| i.is_passive()).collect()
    }
}

/// The built-in magic item catalog
pub fn default_items() -> ItemCatalog {
    let toml = include_str!("../../config/items.toml");
    ItemCatalog::from_toml_str(toml).unwrap_or_else(|_| {
        ItemCatalog::from_items(vec![MagicItem {
            name: "Potion of Minor Healing".to_string(),
            description: "A basic potion that restores a small amount of health.".to_string(),
            effect: "Heals the user for 40 HP".to_string(),
            rarity: Rarity::Common,
            kind: ItemKind::SingleUse {
                hp_restore: 40,
                ep_restore: 0,
                shields_all_damage: false,
            },
        }])
    })
}

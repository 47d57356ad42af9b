//! Ability catalog - class ability pools

use super::CatalogError;
use crate::ability::Ability;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One class and its ordered ability pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassAbilities {
    pub class: String,
    pub abilities: Vec<Ability>,
}

/// Container matching the TOML file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AbilitiesConfig {
    #[serde(rename = "class")]
    classes: Vec<ClassAbilities>,
}

/// The full set of classes and their ability pools, in catalog order
#[derive(Debug, Clone)]
pub struct AbilityCatalog {
    classes: Vec<ClassAbilities>,
}

impl AbilityCatalog {
    /// Build a catalog from already-constructed class pools (fixtures)
    pub fn from_classes(classes: Vec<ClassAbilities>) -> Result<Self, CatalogError> {
        let catalog = AbilityCatalog { classes };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let config: AbilitiesConfig = super::parse_toml(content)?;
        Self::from_classes(config.classes)
    }

    /// Load a catalog from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, CatalogError> {
        let config: AbilitiesConfig = super::load_toml(path)?;
        Self::from_classes(config.classes)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.classes.is_empty() {
            return Err(CatalogError::ValidationError(
                "ability catalog has no classes".to_string(),
            ));
        }
        for entry in &self.classes {
            if entry.abilities.is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "class {} has an empty ability pool",
                    entry.class
                )));
            }
        }
        let mut names: Vec<&str> = self.classes.iter().map(|c| c.class.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        if names.len() != self.classes.len() {
            return Err(CatalogError::ValidationError(
                "duplicate class name in ability catalog".to_string(),
            ));
        }
        Ok(())
    }

    /// Class names in catalog order
    pub fn classes(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.class.as_str()).collect()
    }

    /// Ordered ability pool for one class (case-insensitive lookup)
    pub fn abilities_for_class(&self, class: &str) -> Option<&[Ability]> {
        self.classes
            .iter()
            .find(|c| c.class.eq_ignore_ascii_case(class))
            .map(|c| c.abilities.as_slice())
    }

    /// All abilities across every class, in catalog order. Used for the
    /// Gnome bonus slot, which may be filled from any class.
    pub fn all_abilities(&self) -> Vec<&Ability> {
        self.classes
            .iter()
            .flat_map(|c| c.abilities.iter())
            .collect()
    }

    /// Find one ability by name within a class pool (case-insensitive)
    pub fn find_in_class(&self, class: &str, name: &str) -> Option<&Ability> {
        self.abilities_for_class(class)?
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Find one ability by name anywhere in the catalog (case-insensitive)
    pub fn find_anywhere(&self, name: &str) -> Option<&Ability> {
        self.all_abilities()
            .into_iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

/// The built-in ability catalog: Mage, Rogue, and Warrior pools
pub fn default_abilities() -> AbilityCatalog {
    let toml = include_str!("../../config/abilities.toml");
    AbilityCatalog::from_toml_str(toml).unwrap_or_else(|_| AbilityCatalog {
        classes: vec![ClassAbilities {
            class: "Warrior".to_string(),
            abilities: vec![Ability {
                name: "Cleave".to_string(),
                description: "A sweeping strike that deals 20 physical damage.".to_string(),
                ep_cost: 5,
                damage: 20,
                restore_amount: 0,
                restore_kind: None,
                special: None,
            }],
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RestoreKind, SpecialKind};

    #[test]
    fn test_default_catalog_has_three_classes() {
        let catalog = default_abilities();
        assert_eq!(catalog.classes(), vec!["Mage", "Rogue", "Warrior"]);
        for class in catalog.classes() {
            assert_eq!(catalog.abilities_for_class(class).unwrap().len(), 5);
        }
        assert_eq!(catalog.all_abilities().len(), 15);
    }

    #[test]
    fn test_special_tags_are_set() {
        let catalog = default_abilities();
        assert_eq!(
            catalog.find_in_class("Mage", "Arcane Shield").unwrap().special,
            Some(SpecialKind::Shield)
        );
        assert_eq!(
            catalog.find_in_class("Warrior", "Ironclad Defense").unwrap().special,
            Some(SpecialKind::Shield)
        );
        assert_eq!(
            catalog.find_in_class("Rogue", "Smoke Bomb").unwrap().special,
            Some(SpecialKind::Evade)
        );
        assert_eq!(
            catalog.find_in_class("Rogue", "Sneak Attack").unwrap().special,
            Some(SpecialKind::EvadeAndStrike)
        );
    }

    #[test]
    fn test_restore_routing() {
        let catalog = default_abilities();
        let heal = catalog.find_in_class("Mage", "Lesser Heal").unwrap();
        assert_eq!(heal.restore_kind, Some(RestoreKind::Hp));
        assert_eq!(heal.restore_amount, 40);

        let focus = catalog.find_in_class("Rogue", "Focus").unwrap();
        assert_eq!(focus.restore_kind, Some(RestoreKind::Ep));
        assert_eq!(focus.restore_amount, 10);
        assert_eq!(focus.ep_cost, 0);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = default_abilities();
        assert!(catalog.abilities_for_class("mage").is_some());
        assert!(catalog.find_anywhere("arcane bolt").is_some());
        assert!(catalog.find_in_class("Warrior", "Arcane Bolt").is_none());
    }

    #[test]
    fn test_empty_class_pool_rejected() {
        let toml = r#"
[[class]]
class = "Mage"
abilities = []
"#;
        let err = AbilityCatalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, CatalogError::ValidationError(_)));
    }

    #[test]
    fn test_duplicate_class_rejected() {
        let result = AbilityCatalog::from_classes(vec![
            ClassAbilities {
                class: "Mage".to_string(),
                abilities: vec![Ability {
                    name: "Spark".to_string(),
                    description: "A small jolt.".to_string(),
                    ep_cost: 1,
                    damage: 5,
                    restore_amount: 0,
                    restore_kind: None,
                    special: None,
                }],
            },
            ClassAbilities {
                class: "Mage".to_string(),
                abilities: vec![Ability {
                    name: "Spark 2".to_string(),
                    description: "Another jolt.".to_string(),
                    ep_cost: 1,
                    damage: 5,
                    restore_amount: 0,
                    restore_kind: None,
                    special: None,
                }],
            },
        ]);
        assert!(result.is_err());
    }
}

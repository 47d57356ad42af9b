//! Race - Static race definitions and their stat bonuses

use crate::constants::BASE_ABILITY_SLOTS;
use serde::{Deserialize, Serialize};

/// The four playable races. Each grants a fixed bonus on top of the base
/// stats; Gnomes trade stat bonuses for an extra ability slot that may be
/// filled from any class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Gnome,
}

impl Race {
    /// Get all races, in display order
    pub fn all() -> &'static [Race] {
        &[Race::Human, Race::Dwarf, Race::Elf, Race::Gnome]
    }

    /// Bonus to maximum HP
    pub fn hp_bonus(&self) -> u32 {
        match self {
            Race::Human => 15,
            Race::Dwarf => 30,
            Race::Elf => 0,
            Race::Gnome => 0,
        }
    }

    /// Bonus to maximum EP
    pub fn ep_bonus(&self) -> u32 {
        match self {
            Race::Human => 5,
            Race::Dwarf => 0,
            Race::Elf => 15,
            Race::Gnome => 0,
        }
    }

    /// Whether this race grants an extra ability slot
    pub fn extra_ability_slot(&self) -> bool {
        matches!(self, Race::Gnome)
    }

    /// Number of ability slots a character of this race has
    pub fn ability_slots(&self) -> usize {
        if self.extra_ability_slot() {
            BASE_ABILITY_SLOTS + 1
        } else {
            BASE_ABILITY_SLOTS
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Race::Human => "Human",
            Race::Dwarf => "Dwarf",
            Race::Elf => "Elf",
            Race::Gnome => "Gnome",
        }
    }

    /// Flavor description shown during character creation
    pub fn description(&self) -> &'static str {
        match self {
            Race::Human => {
                "Adaptable and resilient, humans possess a balanced set of attributes."
            }
            Race::Dwarf => {
                "Stocky and tough, dwarves are known for their incredible endurance and steadfastness."
            }
            Race::Elf => {
                "Graceful and naturally attuned to arcane energies, elves excel in precise actions and magical prowess."
            }
            Race::Gnome => {
                "Clever and resourceful, gnomes have a knack for finding hidden opportunities or leveraging unusual tricks."
            }
        }
    }

}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

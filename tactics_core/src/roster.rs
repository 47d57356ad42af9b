//! Character rosters
//!
//! Both players' characters live in a single registry keyed by owner.
//! Each player may hold up to six characters, and names are unique per
//! player ignoring case (the same name may appear on both sides).

use crate::ability::Ability;
use crate::catalog::AbilityCatalog;
use crate::combatant::Combatant;
use crate::constants::ROSTER_CAP;
use crate::race::Race;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which side of the table a character belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerId {
    One,
    Two,
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("{player} already has {cap} characters")]
    RosterFull { player: PlayerId, cap: usize },
    #[error("{player} already has a character named '{name}'")]
    NameTaken { player: PlayerId, name: String },
    #[error("unknown class: {0}")]
    UnknownClass(String),
    #[error("unknown ability for this character: {0}")]
    UnknownAbility(String),
    #[error("expected {expected} abilities, got {got}")]
    WrongAbilityCount { expected: usize, got: usize },
    #[error("{player} has no character at index {index}")]
    NoSuchCharacter { player: PlayerId, index: usize },
}

/// The shared character registry for both players
#[derive(Debug, Default)]
pub struct Roster {
    entries: Vec<(PlayerId, Combatant)>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Validate and add a new character to `player`'s side.
    ///
    /// The ability picks are resolved against `catalog`: a Gnome may mix
    /// abilities from any class, everyone else picks from their own
    /// class's pool. The pick count must match the race's slot count.
    pub fn create_character(
        &mut self,
        player: PlayerId,
        name: &str,
        race: Race,
        class_name: &str,
        ability_names: &[&str],
        catalog: &AbilityCatalog,
    ) -> Result<&Combatant, RosterError> {
        if self.len(player) >= ROSTER_CAP {
            return Err(RosterError::RosterFull {
                player,
                cap: ROSTER_CAP,
            });
        }
        if self.find_by_name(player, name).is_some() {
            return Err(RosterError::NameTaken {
                player,
                name: name.to_string(),
            });
        }
        let abilities = resolve_abilities(race, class_name, ability_names, catalog)?;
        self.entries
            .push((player, Combatant::new(name, race, class_name, abilities)));
        match self.entries.last() {
            Some((_, combatant)) => Ok(combatant),
            None => unreachable!(),
        }
    }

    /// Number of characters on `player`'s side
    pub fn len(&self, player: PlayerId) -> usize {
        self.entries.iter().filter(|(p, _)| *p == player).count()
    }

    pub fn is_empty(&self, player: PlayerId) -> bool {
        self.len(player) == 0
    }

    /// All of `player`'s characters, in creation order
    pub fn characters(&self, player: PlayerId) -> Vec<&Combatant> {
        self.entries
            .iter()
            .filter(|(p, _)| *p == player)
            .map(|(_, c)| c)
            .collect()
    }

    /// `player`'s character at `index` (position within their own list)
    pub fn get(&self, player: PlayerId, index: usize) -> Option<&Combatant> {
        self.entries
            .iter()
            .filter(|(p, _)| *p == player)
            .nth(index)
            .map(|(_, c)| c)
    }

    pub fn get_mut(&mut self, player: PlayerId, index: usize) -> Option<&mut Combatant> {
        self.entries
            .iter_mut()
            .filter(|(p, _)| *p == player)
            .nth(index)
            .map(|(_, c)| c)
    }

    /// Name lookup within one player's side (case-insensitive; the
    /// uniqueness check treats "Zara" and "zara" as the same character)
    pub fn find_by_name(&self, player: PlayerId, name: &str) -> Option<&Combatant> {
        self.entries
            .iter()
            .filter(|(p, _)| *p == player)
            .map(|(_, c)| c)
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Remove and return `player`'s character at `index`
    pub fn delete(&mut self, player: PlayerId, index: usize) -> Result<Combatant, RosterError> {
        let global = self
            .global_index(player, index)
            .ok_or(RosterError::NoSuchCharacter { player, index })?;
        Ok(self.entries.remove(global).1)
    }

    /// Replace a character's ability loadout, with the same validation
    /// as creation
    pub fn set_abilities(
        &mut self,
        player: PlayerId,
        index: usize,
        ability_names: &[&str],
        catalog: &AbilityCatalog,
    ) -> Result<(), RosterError> {
        let combatant = self
            .get(player, index)
            .ok_or(RosterError::NoSuchCharacter { player, index })?;
        let abilities = resolve_abilities(
            combatant.race(),
            combatant.class_name(),
            ability_names,
            catalog,
        )?;
        if let Some(combatant) = self.get_mut(player, index) {
            combatant.set_abilities(abilities);
        }
        Ok(())
    }

    /// Borrow one character from each side for a battle
    pub fn battle_pair(
        &mut self,
        index1: usize,
        index2: usize,
    ) -> Result<(&mut Combatant, &mut Combatant), RosterError> {
        let g1 = self
            .global_index(PlayerId::One, index1)
            .ok_or(RosterError::NoSuchCharacter {
                player: PlayerId::One,
                index: index1,
            })?;
        let g2 = self
            .global_index(PlayerId::Two, index2)
            .ok_or(RosterError::NoSuchCharacter {
                player: PlayerId::Two,
                index: index2,
            })?;
        // The sides are disjoint, so the global positions always differ.
        if g1 < g2 {
            let (left, right) = self.entries.split_at_mut(g2);
            Ok((&mut left[g1].1, &mut right[0].1))
        } else {
            let (left, right) = self.entries.split_at_mut(g1);
            Ok((&mut right[0].1, &mut left[g2].1))
        }
    }

    fn global_index(&self, player: PlayerId, index: usize) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, (p, _))| *p == player)
            .nth(index)
            .map(|(i, _)| i)
    }
}

/// Resolve ability picks by name against the catalog, enforcing the
/// race's slot count and class restriction.
fn resolve_abilities(
    race: Race,
    class_name: &str,
    ability_names: &[&str],
    catalog: &AbilityCatalog,
) -> Result<Vec<Ability>, RosterError> {
    if catalog.abilities_for_class(class_name).is_none() {
        return Err(RosterError::UnknownClass(class_name.to_string()));
    }
    let expected = race.ability_slots();
    if ability_names.len() != expected {
        return Err(RosterError::WrongAbilityCount {
            expected,
            got: ability_names.len(),
        });
    }
    ability_names
        .iter()
        .map(|name| {
            let found = if race.extra_ability_slot() {
                catalog.find_anywhere(name)
            } else {
                catalog.find_in_class(class_name, name)
            };
            found
                .cloned()
                .ok_or_else(|| RosterError::UnknownAbility(name.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_abilities;

    fn mage_picks() -> [&'static str; 3] {
        ["Arcane Bolt", "Lesser Heal", "Arcane Shield"]
    }

    #[test]
    fn test_create_character() {
        let catalog = default_abilities();
        let mut roster = Roster::new();

        let created = roster
            .create_character(
                PlayerId::One,
                "Zara",
                Race::Elf,
                "Mage",
                &mage_picks(),
                &catalog,
            )
            .unwrap();
        assert_eq!(created.name(), "Zara");
        assert_eq!(created.abilities().len(), 3);
        assert_eq!(roster.len(PlayerId::One), 1);
        assert!(roster.is_empty(PlayerId::Two));
    }

    #[test]
    fn test_name_unique_per_player_only() {
        let catalog = default_abilities();
        let mut roster = Roster::new();
        roster
            .create_character(
                PlayerId::One,
                "Zara",
                Race::Elf,
                "Mage",
                &mage_picks(),
                &catalog,
            )
            .unwrap();

        let err = roster
            .create_character(
                PlayerId::One,
                "Zara",
                Race::Human,
                "Mage",
                &mage_picks(),
                &catalog,
            )
            .unwrap_err();
        assert_eq!(
            err,
            RosterError::NameTaken {
                player: PlayerId::One,
                name: "Zara".to_string(),
            }
        );

        // The other side can reuse the name.
        assert!(roster
            .create_character(
                PlayerId::Two,
                "Zara",
                Race::Human,
                "Mage",
                &mage_picks(),
                &catalog,
            )
            .is_ok());
    }

    #[test]
    fn test_name_uniqueness_ignores_case() {
        let catalog = default_abilities();
        let mut roster = Roster::new();
        roster
            .create_character(
                PlayerId::One,
                "Zara",
                Race::Elf,
                "Mage",
                &mage_picks(),
                &catalog,
            )
            .unwrap();

        let err = roster
            .create_character(
                PlayerId::One,
                "zara",
                Race::Human,
                "Mage",
                &mage_picks(),
                &catalog,
            )
            .unwrap_err();
        assert_eq!(
            err,
            RosterError::NameTaken {
                player: PlayerId::One,
                name: "zara".to_string(),
            }
        );
        assert!(roster.find_by_name(PlayerId::One, "ZARA").is_some());
    }

    #[test]
    fn test_roster_cap() {
        let catalog = default_abilities();
        let mut roster = Roster::new();
        for i in 0..6 {
            roster
                .create_character(
                    PlayerId::One,
                    &format!("Hero {i}"),
                    Race::Human,
                    "Warrior",
                    &["Cleave", "Shield Bash", "Rallying Cry"],
                    &catalog,
                )
                .unwrap();
        }
        let err = roster
            .create_character(
                PlayerId::One,
                "One Too Many",
                Race::Human,
                "Warrior",
                &["Cleave", "Shield Bash", "Rallying Cry"],
                &catalog,
            )
            .unwrap_err();
        assert_eq!(
            err,
            RosterError::RosterFull {
                player: PlayerId::One,
                cap: 6,
            }
        );
        // The cap is per player.
        assert!(roster
            .create_character(
                PlayerId::Two,
                "Hero 0",
                Race::Human,
                "Warrior",
                &["Cleave", "Shield Bash", "Rallying Cry"],
                &catalog,
            )
            .is_ok());
    }

    #[test]
    fn test_ability_count_follows_race() {
        let catalog = default_abilities();
        let mut roster = Roster::new();

        let err = roster
            .create_character(
                PlayerId::One,
                "Pip",
                Race::Gnome,
                "Rogue",
                &["Backstab", "Smoke Bomb", "Shiv"],
                &catalog,
            )
            .unwrap_err();
        assert_eq!(
            err,
            RosterError::WrongAbilityCount {
                expected: 4,
                got: 3,
            }
        );
    }

    #[test]
    fn test_gnome_picks_across_classes() {
        let catalog = default_abilities();
        let mut roster = Roster::new();

        // Three Rogue picks plus a Mage ability in the bonus slot.
        let created = roster
            .create_character(
                PlayerId::One,
                "Pip",
                Race::Gnome,
                "Rogue",
                &["Backstab", "Smoke Bomb", "Shiv", "Arcane Bolt"],
                &catalog,
            )
            .unwrap();
        assert_eq!(created.abilities().len(), 4);
        assert_eq!(created.abilities()[3].name, "Arcane Bolt");
    }

    #[test]
    fn test_non_gnome_cannot_poach_other_class() {
        let catalog = default_abilities();
        let mut roster = Roster::new();

        let err = roster
            .create_character(
                PlayerId::One,
                "Conn",
                Race::Human,
                "Warrior",
                &["Cleave", "Shield Bash", "Arcane Bolt"],
                &catalog,
            )
            .unwrap_err();
        assert_eq!(err, RosterError::UnknownAbility("Arcane Bolt".to_string()));
    }

    #[test]
    fn test_unknown_class() {
        let catalog = default_abilities();
        let mut roster = Roster::new();
        let err = roster
            .create_character(
                PlayerId::One,
                "Nel",
                Race::Elf,
                "Bard",
                &mage_picks(),
                &catalog,
            )
            .unwrap_err();
        assert_eq!(err, RosterError::UnknownClass("Bard".to_string()));
    }

    #[test]
    fn test_delete_and_indexing() {
        let catalog = default_abilities();
        let mut roster = Roster::new();
        for name in ["A", "B", "C"] {
            roster
                .create_character(PlayerId::One, name, Race::Elf, "Mage", &mage_picks(), &catalog)
                .unwrap();
        }
        roster
            .create_character(PlayerId::Two, "X", Race::Elf, "Mage", &mage_picks(), &catalog)
            .unwrap();

        let removed = roster.delete(PlayerId::One, 1).unwrap();
        assert_eq!(removed.name(), "B");
        assert_eq!(roster.len(PlayerId::One), 2);
        assert_eq!(roster.get(PlayerId::One, 1).unwrap().name(), "C");
        // The other side is untouched.
        assert_eq!(roster.get(PlayerId::Two, 0).unwrap().name(), "X");

        let err = roster.delete(PlayerId::Two, 5).unwrap_err();
        assert_eq!(
            err,
            RosterError::NoSuchCharacter {
                player: PlayerId::Two,
                index: 5,
            }
        );
    }

    #[test]
    fn test_set_abilities_revalidates() {
        let catalog = default_abilities();
        let mut roster = Roster::new();
        roster
            .create_character(
                PlayerId::One,
                "Zara",
                Race::Elf,
                "Mage",
                &mage_picks(),
                &catalog,
            )
            .unwrap();

        roster
            .set_abilities(
                PlayerId::One,
                0,
                &["Arcane Bolt", "Arcane Blast", "Mana Channel"],
                &catalog,
            )
            .unwrap();
        assert_eq!(
            roster.get(PlayerId::One, 0).unwrap().abilities()[1].name,
            "Arcane Blast"
        );

        let err = roster
            .set_abilities(PlayerId::One, 0, &["Arcane Bolt", "Backstab", "Mana Channel"], &catalog)
            .unwrap_err();
        assert_eq!(err, RosterError::UnknownAbility("Backstab".to_string()));
    }

    #[test]
    fn test_battle_pair_borrows_both_sides() {
        let catalog = default_abilities();
        let mut roster = Roster::new();
        roster
            .create_character(PlayerId::One, "A", Race::Elf, "Mage", &mage_picks(), &catalog)
            .unwrap();
        roster
            .create_character(PlayerId::Two, "X", Race::Elf, "Mage", &mage_picks(), &catalog)
            .unwrap();
        roster
            .create_character(PlayerId::Two, "Y", Race::Elf, "Mage", &mage_picks(), &catalog)
            .unwrap();

        let (p1, p2) = roster.battle_pair(0, 1).unwrap();
        assert_eq!(p1.name(), "A");
        assert_eq!(p2.name(), "Y");
        p1.stats_mut().hp = 1;
        assert_eq!(roster.get(PlayerId::One, 0).unwrap().stats().hp, 1);

        let err = roster.battle_pair(3, 0).unwrap_err();
        assert_eq!(
            err,
            RosterError::NoSuchCharacter {
                player: PlayerId::One,
                index: 3,
            }
        );
    }
}

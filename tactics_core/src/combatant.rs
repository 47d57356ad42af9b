//! Combatant - A character: stats, ability loadout, inventory, equipment

use crate::ability::Ability;
use crate::constants::{BASE_MAX_EP, BASE_MAX_HP, REWARD_WIN_INTERVAL};
use crate::item::{ItemKind, MagicItem};
use crate::race::Race;
use crate::stat_block::StatBlock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inventory operation error. All variants are recoverable; callers
/// re-prompt rather than abort.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ItemError {
    #[error("no item at inventory slot {0}")]
    NoSuchItem(usize),
    #[error("{0} is not single-use and cannot be activated")]
    NotSingleUse(String),
}

/// What activating a single-use item actually did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUse {
    pub item_name: String,
    /// HP actually regained (after the max-HP cap)
    pub hp_restored: u32,
    /// EP actually regained (after the max-EP cap)
    pub ep_restored: u32,
    /// Whether the item raised the shield flag for the current round
    pub shielded: bool,
}

/// Per-round regeneration granted by an equipped passive item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassiveTick {
    pub healed: u32,
    pub ep_gained: u32,
}

impl PassiveTick {
    pub fn is_empty(&self) -> bool {
        self.healed == 0 && self.ep_gained == 0
    }
}

/// A player-built character.
///
/// Maximum HP/EP are always base + race bonus + equipped passive bonus;
/// every operation that changes that sum immediately clamps the current
/// pools to the new maximums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    name: String,
    race: Race,
    class_name: String,
    stats: StatBlock,
    abilities: Vec<Ability>,
    inventory: Vec<MagicItem>,
    /// Index into `inventory`; the equipped item is always present there
    equipped: Option<usize>,
    win_count: u32,
}

impl Combatant {
    /// Create a combatant at full HP and EP
    pub fn new(name: &str, race: Race, class_name: &str, abilities: Vec<Ability>) -> Self {
        let max_hp = BASE_MAX_HP + race.hp_bonus();
        let max_ep = BASE_MAX_EP + race.ep_bonus();
        Combatant {
            name: name.to_string(),
            race,
            class_name: class_name.to_string(),
            stats: StatBlock::new(max_hp, max_ep),
            abilities,
            inventory: Vec::new(),
            equipped: None,
            win_count: 0,
        }
    }

    // === Accessors ===

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn inventory(&self) -> &[MagicItem] {
        &self.inventory
    }

    pub fn equipped_item(&self) -> Option<&MagicItem> {
        self.equipped.map(|i| &self.inventory[i])
    }

    /// Inventory position of the equipped item. Positions disambiguate
    /// duplicate items, which repeated reward draws can produce.
    pub fn equipped_index(&self) -> Option<usize> {
        self.equipped
    }

    pub fn win_count(&self) -> u32 {
        self.win_count
    }

    /// Size of the per-round move menu: abilities plus Defend and Recharge
    pub fn move_menu_size(&self) -> usize {
        self.abilities.len() + 2
    }

    /// Replace the ability loadout (roster edit path; validation happens
    /// against the catalog before this is called)
    pub fn set_abilities(&mut self, abilities: Vec<Ability>) {
        self.abilities = abilities;
    }

    // === Stat mutation ===

    pub fn heal(&mut self, amount: u32) {
        self.stats.heal(amount);
    }

    pub fn restore_energy(&mut self, amount: u32) {
        self.stats.restore_energy(amount);
    }

    /// Restore HP and EP to full (battle start)
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Recompute maximums from base + race + equipped passive item, then
    /// clamp the current pools
    fn adjust_stats(&mut self) {
        let (item_hp, item_ep) = self
            .equipped_item()
            .map(|item| item.stat_bonuses())
            .unwrap_or((0, 0));
        let max_hp = BASE_MAX_HP + self.race.hp_bonus() + item_hp;
        let max_ep = BASE_MAX_EP + self.race.ep_bonus() + item_ep;
        self.stats.set_max_stats(max_hp, max_ep);
    }

    // === Inventory ===

    pub fn add_item(&mut self, item: MagicItem) {
        self.inventory.push(item);
    }

    /// Remove the item at `index`, unequipping it first if needed
    pub fn remove_item(&mut self, index: usize) -> Result<MagicItem, ItemError> {
        if index >= self.inventory.len() {
            return Err(ItemError::NoSuchItem(index));
        }
        match self.equipped {
            Some(e) if e == index => self.unequip(),
            Some(e) if e > index => self.equipped = Some(e - 1),
            _ => {}
        }
        Ok(self.inventory.remove(index))
    }

    /// Equip the inventory item at `index`. Passive bonuses take effect
    /// immediately with the clamp invariant.
    pub fn equip(&mut self, index: usize) -> Result<(), ItemError> {
        if index >= self.inventory.len() {
            return Err(ItemError::NoSuchItem(index));
        }
        self.equipped = Some(index);
        self.adjust_stats();
        Ok(())
    }

    /// Unequip the current item. A benign no-op when nothing is equipped.
    pub fn unequip(&mut self) {
        if self.equipped.take().is_some() {
            self.adjust_stats();
        }
    }

    /// Activate a single-use item: apply its restores and/or shield, then
    /// consume it
    pub fn use_item(&mut self, index: usize) -> Result<ItemUse, ItemError> {
        let item = self
            .inventory
            .get(index)
            .ok_or(ItemError::NoSuchItem(index))?;
        let (hp_restore, ep_restore, shields) = match item.kind {
            ItemKind::SingleUse {
                hp_restore,
                ep_restore,
                shields_all_damage,
            } => (hp_restore, ep_restore, shields_all_damage),
            ItemKind::Passive { .. } => {
                return Err(ItemError::NotSingleUse(item.name.clone()));
            }
        };
        let name = item.name.clone();

        let hp_before = self.stats.hp;
        let ep_before = self.stats.ep;
        self.stats.heal(hp_restore);
        self.stats.restore_energy(ep_restore);
        if shields {
            self.stats.shielded = true;
        }

        // Consumed on activation
        let removed = self.remove_item(index);
        debug_assert!(removed.is_ok());

        Ok(ItemUse {
            item_name: name,
            hp_restored: self.stats.hp - hp_before,
            ep_restored: self.stats.ep - ep_before,
            shielded: shields,
        })
    }

    /// Apply the equipped passive item's per-round regeneration.
    /// Returns what was actually gained after the caps.
    pub fn apply_passive_effects(&mut self) -> PassiveTick {
        let (heal, ep) = self
            .equipped_item()
            .map(|item| item.per_turn_effects())
            .unwrap_or((0, 0));
        let hp_before = self.stats.hp;
        let ep_before = self.stats.ep;
        self.stats.heal(heal);
        self.stats.restore_energy(ep);
        PassiveTick {
            healed: self.stats.hp - hp_before,
            ep_gained: self.stats.ep - ep_before,
        }
    }

    // === Win tracking ===

    /// Record a battle win. Returns true when this win is a reward
    /// milestone (every third win).
    pub fn record_win(&mut self) -> bool {
        self.win_count += 1;
        self.win_count % REWARD_WIN_INTERVAL == 0
    }
}

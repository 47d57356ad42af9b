//! StatBlock - HP/EP pools and per-round combat flags for one combatant

use crate::constants::RECHARGE_EP;
use serde::{Deserialize, Serialize};

/// Resource state for a single combatant.
///
/// Invariants maintained by every method: `hp <= max_hp`, `ep <= max_ep`,
/// and neither pool goes below zero. The three flags cover exactly one
/// round and are cleared by the engine at round start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    pub ep: u32,
    pub max_hp: u32,
    pub max_ep: u32,

    // === Per-round flags ===
    /// Incoming damage is halved this round
    pub defending: bool,
    /// 50% chance to negate each incoming hit this round
    pub evading: bool,
    /// All incoming damage is negated this round
    pub shielded: bool,
}

impl StatBlock {
    /// Create a stat block at full HP and EP
    pub fn new(max_hp: u32, max_ep: u32) -> Self {
        StatBlock {
            hp: max_hp,
            ep: max_ep,
            max_hp,
            max_ep,
            defending: false,
            evading: false,
            shielded: false,
        }
    }

    /// Whether the combatant is still standing
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Regain HP, capped at the maximum
    pub fn heal(&mut self, amount: u32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Regain EP, capped at the maximum
    pub fn restore_energy(&mut self, amount: u32) {
        self.ep = (self.ep + amount).min(self.max_ep);
    }

    /// Deduct EP for a move. Callers verify affordability first; the pool
    /// floors at zero regardless.
    pub fn spend_energy(&mut self, cost: u32) {
        self.ep = self.ep.saturating_sub(cost);
    }

    /// The fixed +5 EP regen, applied at round start and by the Recharge move
    pub fn recharge(&mut self) {
        self.restore_energy(RECHARGE_EP);
    }

    /// Clear the per-round flags. Called at the start of every round,
    /// before move selection.
    pub fn reset_flags(&mut self) {
        self.defending = false;
        self.evading = false;
        self.shielded = false;
    }

    /// Restore HP and EP to their maximums (battle start)
    pub fn reset(&mut self) {
        self.hp = self.max_hp;
        self.ep = self.max_ep;
    }

    /// Change the maximums and immediately clamp the current pools.
    ///
    /// Raising a max never raises the current value; lowering a max trims
    /// the current value down to the new ceiling.
    pub fn set_max_stats(&mut self, max_hp: u32, max_ep: u32) {
        self.max_hp = max_hp;
        self.max_ep = max_ep;
        self.hp = self.hp.min(max_hp);
        self.ep = self.ep.min(max_ep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_starts_full() {
        let stats = StatBlock::new(115, 55);
        assert_eq!(stats.hp, 115);
        assert_eq!(stats.ep, 55);
        assert!(stats.is_alive());
        assert!(!stats.defending && !stats.evading && !stats.shielded);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut stats = StatBlock::new(100, 50);
        stats.hp = 90;
        stats.heal(40);
        assert_eq!(stats.hp, 100);
    }

    #[test]
    fn test_spend_energy_floors_at_zero() {
        let mut stats = StatBlock::new(100, 50);
        stats.ep = 3;
        stats.spend_energy(10);
        assert_eq!(stats.ep, 0);
    }

    #[test]
    fn test_recharge_caps_at_max() {
        let mut stats = StatBlock::new(100, 50);
        stats.ep = 48;
        stats.recharge();
        assert_eq!(stats.ep, 50);

        stats.ep = 20;
        stats.recharge();
        assert_eq!(stats.ep, 25);
    }

    #[test]
    fn test_set_max_stats_trims_current() {
        let mut stats = StatBlock::new(120, 55);
        stats.set_max_stats(100, 50);
        assert_eq!(stats.hp, 100);
        assert_eq!(stats.ep, 50);

        // Raising the max leaves current values where they were
        stats.set_max_stats(130, 60);
        assert_eq!(stats.hp, 100);
        assert_eq!(stats.ep, 50);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut stats = StatBlock::new(100, 50);
        stats.hp = 12;
        stats.ep = 4;
        stats.reset();
        let once = stats.clone();
        stats.reset();
        assert_eq!(stats, once);
        assert_eq!(stats.hp, 100);
        assert_eq!(stats.ep, 50);
    }

    proptest! {
        /// Any sequence of heal/restore/spend/recharge keeps both pools
        /// inside [0, max].
        #[test]
        fn prop_pools_stay_clamped(ops in prop::collection::vec((0u8..4, 0u32..200), 1..50)) {
            let mut stats = StatBlock::new(100, 50);
            stats.hp = 40;
            stats.ep = 10;
            for (op, amount) in ops {
                match op {
                    0 => stats.heal(amount),
                    1 => stats.restore_energy(amount),
                    2 => stats.spend_energy(amount),
                    _ => stats.recharge(),
                }
                prop_assert!(stats.hp <= stats.max_hp);
                prop_assert!(stats.ep <= stats.max_ep);
            }
        }
    }
}

//! Fixed game rules shared across the engine

/// Base maximum HP before race and item bonuses.
pub const BASE_MAX_HP: u32 = 100;

/// Base maximum EP before race and item bonuses.
pub const BASE_MAX_EP: u32 = 50;

/// EP regained by the round-start recharge and by the Recharge move.
pub const RECHARGE_EP: u32 = 5;

/// Fixed EP cost of the Defend move.
pub const DEFEND_EP_COST: u32 = 5;

/// Chance for an evading combatant to negate an incoming hit entirely.
pub const EVASION_CHANCE: f64 = 0.5;

/// Ability slots per character; Gnomes get one extra.
pub const BASE_ABILITY_SLOTS: usize = 3;

/// Maximum characters each player may keep on their roster.
pub const ROSTER_CAP: usize = 6;

/// A reward item is drawn every this many wins.
pub const REWARD_WIN_INTERVAL: u32 = 3;

/// Cumulative tier boundaries for the reward draw: a uniform roll in [0,1)
/// at or below the first bound is Common, at or below the second is
/// Uncommon, anything above is Rare.
pub const COMMON_TIER_BOUND: f64 = 0.60;
pub const UNCOMMON_TIER_BOUND: f64 = 0.95;

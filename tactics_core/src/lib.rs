//! tactics_core - Battle resolution library for Fatal Fantasy: Tactics
//!
//! This library provides:
//! - StatBlock: HP/EP state plus per-round combat flags for one combatant
//! - Combatant: a character with abilities, inventory, and an equipped item
//! - Battle: the round state machine (move validation, resolution, win detection)
//! - RewardPolicy: tiered random item drops on win milestones
//!
//! Front-ends plug in through the `MoveProvider` and `OutcomeSink` traits;
//! the engine itself never reads input or prints anything.

pub mod ability;
pub mod battle;
pub mod catalog;
pub mod combat;
pub mod combatant;
pub mod constants;
pub mod item;
pub mod prelude;
pub mod race;
pub mod reward;
pub mod roster;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use ability::Ability;
pub use battle::{
    Battle, BattleResult, CombatantView, MoveChoice, MoveError, MoveProvider, NullSink,
    OutcomeSink, PassiveTick, PlayerRoundSummary, RoundOutcome, RoundStart, SideStatus, Winner,
};
pub use catalog::{default_abilities, default_items, AbilityCatalog, CatalogError, ItemCatalog};
pub use combat::{resolve_damage, resolve_damage_with_rng, DamageOutcome, DamageReport};
pub use combatant::{Combatant, ItemError, ItemUse};
pub use item::{ItemKind, MagicItem};
pub use race::Race;
pub use reward::RewardPolicy;
pub use roster::{PlayerId, Roster, RosterError};
pub use stat_block::StatBlock;
pub use types::{Rarity, RestoreKind, SpecialKind};

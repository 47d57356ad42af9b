//! Prelude module for convenient imports
//!
//! ```rust
//! use tactics_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::StatBlock;
pub use crate::types::{Rarity, RestoreKind, SpecialKind};

// Characters
pub use crate::ability::Ability;
pub use crate::combatant::{Combatant, ItemError, ItemUse, PassiveTick};
pub use crate::item::{ItemKind, MagicItem};
pub use crate::race::Race;

// Battle engine
pub use crate::battle::{
    Battle, BattleResult, CombatantView, MoveChoice, MoveError, MoveProvider, NullSink,
    OutcomeSink, RoundOutcome, RoundStart, Winner,
};
pub use crate::combat::{resolve_damage, DamageOutcome, DamageReport};

// Rosters and rewards
pub use crate::reward::RewardPolicy;
pub use crate::roster::{PlayerId, Roster, RosterError};

// Catalogs
pub use crate::catalog::{default_abilities, default_items, AbilityCatalog, ItemCatalog};

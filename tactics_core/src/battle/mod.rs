//! Battle - the round state machine and its front-end interfaces

mod engine;
mod interface;
mod outcome;

pub use engine::{Battle, MoveChoice};
pub use interface::{CombatantView, MoveError, MoveProvider, NullSink, OutcomeSink};
pub use outcome::{
    BattleResult, PlayerRoundSummary, RoundOutcome, RoundStart, SideStatus, Winner,
};

// Per-round passive regeneration is produced by the combatant but reported
// through the battle interfaces, so re-export it here as well.
pub use crate::combatant::PassiveTick;

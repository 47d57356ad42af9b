//! Front-end interfaces - how the engine talks to the outside world

use super::outcome::{BattleResult, RoundOutcome, RoundStart};
use crate::ability::Ability;
use crate::combatant::Combatant;
use thiserror::Error;

/// Why a move selection was rejected. Both variants are recoverable: the
/// engine reports the error to the provider and asks again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("move {choice} is not on the menu (valid choices are 1-{menu_size})")]
    InvalidChoice { choice: usize, menu_size: usize },
    #[error("not enough EP for {move_name}: costs {cost}, have {available}")]
    InsufficientEnergy {
        move_name: String,
        cost: u32,
        available: u32,
    },
}

/// Read-only snapshot of a combatant handed to the move provider
#[derive(Debug, Clone, Copy)]
pub struct CombatantView<'a> {
    pub name: &'a str,
    pub class_name: &'a str,
    pub hp: u32,
    pub max_hp: u32,
    pub ep: u32,
    pub max_ep: u32,
    /// Menu indices 1..=abilities.len() select an ability; the next index
    /// is Defend, the last is Recharge
    pub abilities: &'a [Ability],
    pub menu_size: usize,
}

impl<'a> CombatantView<'a> {
    pub fn of(combatant: &'a Combatant) -> Self {
        let stats = combatant.stats();
        CombatantView {
            name: combatant.name(),
            class_name: combatant.class_name(),
            hp: stats.hp,
            max_hp: stats.max_hp,
            ep: stats.ep,
            max_ep: stats.max_ep,
            abilities: combatant.abilities(),
            menu_size: combatant.move_menu_size(),
        }
    }
}

/// Supplies each combatant's move for the round.
///
/// `choose_move` is called repeatedly for the same combatant until it
/// returns a legal 1-based menu index; the engine never substitutes a
/// default. Each rejection is reported through `move_rejected` first.
pub trait MoveProvider {
    fn choose_move(&mut self, view: &CombatantView<'_>) -> usize;

    fn move_rejected(&mut self, _view: &CombatantView<'_>, _error: &MoveError) {}
}

/// Receives structured round and battle results for display. Purely an
/// observer: engine correctness never depends on what a sink does.
pub trait OutcomeSink {
    fn round_started(&mut self, _start: &RoundStart) {}

    fn round_resolved(&mut self, _outcome: &RoundOutcome) {}

    fn battle_ended(&mut self, _result: &BattleResult) {}
}

/// Sink that ignores everything (headless simulations, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl OutcomeSink for NullSink {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::InvalidChoice {
            choice: 9,
            menu_size: 5,
        };
        assert_eq!(
            err.to_string(),
            "move 9 is not on the menu (valid choices are 1-5)"
        );

        let err = MoveError::InsufficientEnergy {
            move_name: "Arcane Blast".to_string(),
            cost: 30,
            available: 12,
        };
        assert_eq!(
            err.to_string(),
            "not enough EP for Arcane Blast: costs 30, have 12"
        );
    }
}

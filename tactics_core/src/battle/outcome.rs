//! Round and battle outcome types handed to the sink

use crate::combat::DamageReport;
use crate::combatant::{Combatant, PassiveTick};
use crate::item::MagicItem;
use serde::{Deserialize, Serialize};

/// One combatant's state at the start of a round, after the flag reset,
/// the fixed recharge, and the passive item tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideStatus {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub ep: u32,
    pub max_ep: u32,
    /// What the equipped passive item regenerated this round
    pub passive: PassiveTick,
}

impl SideStatus {
    pub(crate) fn of(combatant: &Combatant, passive: PassiveTick) -> Self {
        let stats = combatant.stats();
        SideStatus {
            name: combatant.name().to_string(),
            hp: stats.hp,
            max_hp: stats.max_hp,
            ep: stats.ep,
            max_ep: stats.max_ep,
            passive,
        }
    }
}

/// Snapshot published to the sink before move selection begins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStart {
    pub round: u32,
    pub player1: SideStatus,
    pub player2: SideStatus,
}

/// One combatant's side of a resolved round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoundSummary {
    pub name: String,
    pub move_name: String,
    /// EP delta over the resolution step; negative for Recharge
    pub ep_spent: i32,
    pub hp_after: u32,
    pub ep_after: u32,
    /// The opponent's attack against this combatant, if any
    pub damage_taken: Option<DamageReport>,
    /// HP this combatant's own move restored to them
    pub hp_restored: u32,
    /// EP this combatant's own move restored to them
    pub ep_restored: u32,
}

/// A fully resolved round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u32,
    pub player1: PlayerRoundSummary,
    pub player2: PlayerRoundSummary,
}

/// Who won the battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player1,
    Player2,
    /// Both combatants reached 0 HP in the same round
    Draw,
}

/// Final battle outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    pub winner: Winner,
    /// Number of rounds the battle ran
    pub rounds: u32,
    /// Reward item drawn on a win milestone, already added to the
    /// winner's inventory
    pub reward: Option<MagicItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::DamageOutcome;

    #[test]
    fn test_round_outcome_serializes() {
        let outcome = RoundOutcome {
            round: 2,
            player1: PlayerRoundSummary {
                name: "Kael".to_string(),
                move_name: "Defend".to_string(),
                ep_spent: 5,
                hp_after: 90,
                ep_after: 45,
                damage_taken: Some(DamageReport {
                    raw: 20,
                    applied: 10,
                    outcome: DamageOutcome::Defended,
                    evade_failed: false,
                    hp_before: 100,
                    hp_after: 90,
                    is_knockout: false,
                }),
                hp_restored: 0,
                ep_restored: 0,
            },
            player2: PlayerRoundSummary {
                name: "Mira".to_string(),
                move_name: "Shiv".to_string(),
                ep_spent: 5,
                hp_after: 100,
                ep_after: 45,
                damage_taken: None,
                hp_restored: 0,
                ep_restored: 0,
            },
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let back: RoundOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
        assert!(json.contains("\"defended\""));
    }
}

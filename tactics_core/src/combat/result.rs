//! DamageReport - Outcome of one damage application

use serde::{Deserialize, Serialize};

/// Which defensive branch decided the final damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageOutcome {
    /// Shield flag negated the hit entirely
    Shielded,
    /// The evasion roll succeeded; no damage taken
    Evaded,
    /// Defending halved the incoming damage (floor division)
    Defended,
    /// Full damage landed
    Hit,
}

/// Result of applying one raw damage amount to a stat block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Damage before any mitigation
    pub raw: u32,
    /// Damage actually subtracted from HP
    pub applied: u32,
    pub outcome: DamageOutcome,
    /// True when an evasion roll was attempted and failed; the hit then
    /// fell through at full value (halving comes only from defending)
    pub evade_failed: bool,
    pub hp_before: u32,
    pub hp_after: u32,
    /// Whether this hit dropped the target to 0 HP
    pub is_knockout: bool,
}

impl DamageReport {
    /// Short narrative tag for round logs
    pub fn summary(&self, target_name: &str) -> String {
        let mut line = match self.outcome {
            DamageOutcome::Shielded => {
                format!("{} is shielded and takes no damage!", target_name)
            }
            DamageOutcome::Evaded => format!("{} evaded the attack!", target_name),
            DamageOutcome::Defended => format!(
                "{} defended and takes {} damage!",
                target_name, self.applied
            ),
            DamageOutcome::Hit => format!("{} takes {} damage!", target_name, self.applied),
        };
        if self.evade_failed {
            line = format!("{} tried to evade but failed! {}", target_name, line);
        }
        line
    }
}

//! Core enums shared across the library

use serde::{Deserialize, Serialize};

/// Which resource an ability's restore effect targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoreKind {
    Hp,
    Ep,
}

/// Semantic category of a special ability, interpreted by the battle engine.
///
/// Behavior dispatches on this tag, never on the ability's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialKind {
    /// Take no damage at all this round.
    Shield,
    /// 50% chance to negate each incoming hit this round.
    Evade,
    /// Evade as above, while also dealing the ability's listed damage.
    EvadeAndStrike,
}

/// Rarity tier of a magic item. Tiers partition the item catalog and drive
/// the two-stage reward draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

impl Rarity {
    /// Get all rarity tiers, in ascending order
    pub fn all() -> &'static [Rarity] {
        &[Rarity::Common, Rarity::Uncommon, Rarity::Rare]
    }

    /// Drop rate tag associated with this tier
    pub fn drop_rate(&self) -> f64 {
        match self {
            Rarity::Common => 0.60,
            Rarity::Uncommon => 0.35,
            Rarity::Rare => 0.05,
        }
    }

    /// Display name of the tier
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_rates_sum_to_one() {
        let total: f64 = Rarity::all().iter().map(|r| r.drop_rate()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rarity_serde_names() {
        let json = serde_json::to_string(&Rarity::Uncommon).unwrap();
        assert_eq!(json, "\"uncommon\"");
        let kind: SpecialKind = serde_json::from_str("\"evade_and_strike\"").unwrap();
        assert_eq!(kind, SpecialKind::EvadeAndStrike);
    }
}

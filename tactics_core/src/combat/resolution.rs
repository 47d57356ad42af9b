//! Damage resolution - Apply raw damage to a StatBlock

use super::result::{DamageOutcome, DamageReport};
use crate::constants::EVASION_CHANCE;
use crate::stat_block::StatBlock;
use rand::Rng;

/// Resolve raw damage against a defender's flags, mutating their HP.
///
/// Branches are evaluated in strict order:
/// 1. Shielded: no damage.
/// 2. Evading: a 50% roll negates the hit; a failed roll falls through
///    with the FULL raw damage.
/// 3. Defending: damage is halved with floor division.
/// 4. HP is reduced, flooring at zero.
pub fn resolve_damage(defender: &mut StatBlock, raw: u32) -> DamageReport {
    let mut rng = rand::thread_rng();
    resolve_damage_with_rng(defender, raw, &mut rng)
}

/// Resolve damage with a provided RNG (for deterministic testing)
pub fn resolve_damage_with_rng(
    defender: &mut StatBlock,
    raw: u32,
    rng: &mut impl Rng,
) -> DamageReport {
    let hp_before = defender.hp;

    if defender.shielded {
        return DamageReport {
            raw,
            applied: 0,
            outcome: DamageOutcome::Shielded,
            evade_failed: false,
            hp_before,
            hp_after: hp_before,
            is_knockout: false,
        };
    }

    let mut evade_failed = false;
    if defender.evading {
        if evasion_roll(rng) {
            return DamageReport {
                raw,
                applied: 0,
                outcome: DamageOutcome::Evaded,
                evade_failed: false,
                hp_before,
                hp_after: hp_before,
                is_knockout: false,
            };
        }
        evade_failed = true;
    }

    let (applied, outcome) = if defender.defending {
        (raw / 2, DamageOutcome::Defended)
    } else {
        (raw, DamageOutcome::Hit)
    };

    defender.hp = defender.hp.saturating_sub(applied);

    DamageReport {
        raw,
        applied,
        outcome,
        evade_failed,
        hp_before,
        hp_after: defender.hp,
        is_knockout: !defender.is_alive(),
    }
}

/// The shared 50% evasion roll. Evade-style abilities and item-granted
/// evasion all use this single routine.
fn evasion_roll(rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < EVASION_CHANCE
}

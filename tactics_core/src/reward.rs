//! RewardPolicy - tiered random item drops on win milestones

use crate::catalog::ItemCatalog;
use crate::constants::{COMMON_TIER_BOUND, UNCOMMON_TIER_BOUND};
use crate::item::MagicItem;
use crate::types::Rarity;
use rand::Rng;

/// Two-stage reward draw: first sample a rarity tier from the cumulative
/// boundaries, then pick uniformly among the catalog items of that tier.
///
/// Sampling the tier before the item keeps items within a tier
/// equiprobable no matter how many entries the tier holds, so growing the
/// catalog never shifts the tier probabilities.
#[derive(Debug, Clone, Copy)]
pub struct RewardPolicy<'a> {
    catalog: &'a ItemCatalog,
}

impl<'a> RewardPolicy<'a> {
    pub fn new(catalog: &'a ItemCatalog) -> Self {
        RewardPolicy { catalog }
    }

    /// Draw one reward item, or `None` when the sampled tier is empty
    pub fn draw(&self) -> Option<MagicItem> {
        let mut rng = rand::thread_rng();
        self.draw_with_rng(&mut rng)
    }

    /// Draw with a provided RNG (for deterministic testing)
    pub fn draw_with_rng(&self, rng: &mut impl Rng) -> Option<MagicItem> {
        let tier = sample_tier(rng.gen::<f64>());
        let pool = self.catalog.items_in_tier(tier);
        if pool.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..pool.len());
        Some(pool[index].clone())
    }
}

/// Map a uniform roll in [0,1) onto a rarity tier using the cumulative
/// boundaries (<= 0.60 Common, <= 0.95 Uncommon, else Rare)
pub fn sample_tier(roll: f64) -> Rarity {
    if roll <= COMMON_TIER_BOUND {
        Rarity::Common
    } else if roll <= UNCOMMON_TIER_BOUND {
        Rarity::Uncommon
    } else {
        Rarity::Rare
    }
}

//! Weighted slot sampler
//!
//! Fills one meal slot for the week by roulette-wheel selection without
//! replacement. Lunch and dinner candidates are weighted by inverse protein
//! frequency within the current pass so the week drifts toward variety; quick
//! recipes get a boost under quick bias.

use crate::catalog::{Catalog, Recipe};
use crate::filter::admits;
use crate::options::PlanOptions;
use crate::types::{MealSlot, Protein, Tag};
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Weight multiplier for quick recipes when quick bias is on.
pub const QUICK_WEIGHT_MULTIPLIER: f64 = 1.2;

/// Protein usage within a single slot pass.
#[derive(Debug, Default)]
pub struct ProteinTally {
    counts: HashMap<Protein, u32>,
}

impl ProteinTally {
    pub fn count(&self, protein: Protein) -> u32 {
        self.counts.get(&protein).copied().unwrap_or(0)
    }

    pub fn record(&mut self, protein: Protein) {
        *self.counts.entry(protein).or_insert(0) += 1;
    }
}

/// Selection weight of a candidate given the proteins picked so far.
pub fn candidate_weight(
    recipe: &Recipe,
    slot: MealSlot,
    options: &PlanOptions,
    tally: &ProteinTally,
) -> f64 {
    let mut weight = 1.0;
    if slot != MealSlot::Breakfast {
        weight *= 1.0 / (1.0 + tally.count(recipe.protein) as f64);
    }
    if options.quick_bias && recipe.has_tag(Tag::Quick) {
        weight *= QUICK_WEIGHT_MULTIPLIER;
    }
    weight
}

/// Roulette-wheel selection over `weights`.
///
/// Draws `u` in `[0, total)` and returns the first index whose cumulative
/// weight reaches `u`. Returns `None` for an empty slice.
pub fn roulette<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let total: f64 = weights.iter().sum();
    let draw = rng.gen::<f64>() * total;

    let mut acc = 0.0;
    for (i, weight) in weights.iter().enumerate() {
        acc += weight;
        if acc >= draw {
            return Some(i);
        }
    }
    // Rounding can leave the running sum a hair short of the draw.
    Some(weights.len() - 1)
}

/// Pick up to `count` distinct recipes for `slot`.
///
/// The eligible pool is built once per call: recipes of the slot's meal type
/// admitted by the filter, excluding batch "uses" recipes. Picks are removed
/// from the pool, so the result has no repeats; it is shorter than `count`
/// when the pool runs out.
pub fn pick_meals<'c, R: Rng + ?Sized>(
    catalog: &'c Catalog,
    slot: MealSlot,
    count: usize,
    options: &PlanOptions,
    rng: &mut R,
) -> Vec<&'c Recipe> {
    let mut pool: Vec<&'c Recipe> = catalog
        .by_meal(slot)
        .filter(|r| !r.is_batch_use() && admits(r, options, rng))
        .collect();
    debug!(slot = %slot, pool = pool.len(), "Built eligible pool");

    let mut chosen = Vec::with_capacity(count.min(pool.len()));
    let mut tally = ProteinTally::default();

    while chosen.len() < count {
        let weights: Vec<f64> = pool
            .iter()
            .map(|r| candidate_weight(r, slot, options, &tally))
            .collect();
        let Some(index) = roulette(&weights, rng) else {
            break;
        };

        let pick = pool.remove(index);
        trace!(slot = %slot, recipe = %pick.name, weight = weights[index], "Picked recipe");
        if slot != MealSlot::Breakfast {
            tally.record(pick.protein);
        }
        chosen.push(pick);
    }

    chosen
}

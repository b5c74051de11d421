//! Plan generation
//!
//! A plan is a pure function of the catalog, the options and a random source:
//! each slot is sampled independently, laid out over seven days, then batch
//! linkage overrides fixed slots and family hints are derived from the result.

pub mod batch;
pub mod family;
pub mod plan;
pub mod sampler;

pub use batch::{link_batch, BATCH_SCHEDULE};
pub use family::family_hints;
pub use plan::{
    BatchNote, DayPlan, FamilyHint, GeneratedPlan, PlanMeta, WeekPlan, DAYS_PER_WEEK,
};
pub use sampler::{candidate_weight, pick_meals, roulette, ProteinTally, QUICK_WEIGHT_MULTIPLIER};

use crate::catalog::Catalog;
use crate::options::PlanOptions;
use crate::types::MealSlot;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

/// Generate a week plan from `catalog` using `rng` as the only source of randomness.
pub fn generate<'c, R: Rng + ?Sized>(
    catalog: &'c Catalog,
    options: &PlanOptions,
    rng: &mut R,
) -> GeneratedPlan<'c> {
    let picks = MealSlot::ALL.map(|slot| {
        let chosen = pick_meals(catalog, slot, DAYS_PER_WEEK, options, rng);
        if chosen.is_empty() {
            warn!(slot = %slot, "No eligible recipes; slot left empty");
        } else if chosen.len() < DAYS_PER_WEEK {
            debug!(slot = %slot, distinct = chosen.len(), "Short pool; picks will repeat");
        }
        chosen
    });
    let [breakfasts, lunches, dinners] = &picks;

    let mut week = WeekPlan::from_picks(breakfasts, lunches, dinners);
    let batches = link_batch(catalog, &mut week, options, rng);
    let family = family_hints(&week);

    GeneratedPlan {
        plan: week,
        meta: PlanMeta { batches, family },
    }
}

/// Plan generator bound to a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct Generator {
    catalog: Arc<Catalog>,
}

impl Generator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generate with the thread-local RNG. Output is not reproducible.
    pub fn generate(&self, options: &PlanOptions) -> GeneratedPlan<'_> {
        self.generate_with_rng(options, &mut rand::thread_rng())
    }

    /// Generate with a caller-supplied RNG, e.g. a seeded `ChaCha8Rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        options: &PlanOptions,
        rng: &mut R,
    ) -> GeneratedPlan<'_> {
        debug!(?options, "Generating plan");
        generate(&self.catalog, options, rng)
    }
}

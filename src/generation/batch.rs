//! Batch-cooking linkage: pin one base and two of its reuses onto fixed slots.

use super::plan::{BatchNote, WeekPlan};
use crate::catalog::{Catalog, Recipe};
use crate::filter::admits;
use crate::options::PlanOptions;
use crate::types::MealSlot;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

/// Schedule line attached to every batch note.
pub const BATCH_SCHEDULE: &str = "Cocina el día 1 (domingo/lunes). Usa de nuevo en días 3 y 5.";

/// Day/slot positions overwritten by linkage: base, first use, second use.
const BASE_SLOT: (u8, MealSlot) = (1, MealSlot::Dinner);
const FIRST_USE_SLOT: (u8, MealSlot) = (3, MealSlot::Dinner);
const SECOND_USE_SLOT: (u8, MealSlot) = (5, MealSlot::Lunch);

/// Apply batch linkage to `plan` in place and return the resulting notes.
///
/// Picks one admitted base uniformly. Linkage needs at least two admitted
/// recipes reusing that base; otherwise the plan is left untouched and no
/// note is produced.
pub fn link_batch<'c, R: Rng + ?Sized>(
    catalog: &'c Catalog,
    plan: &mut WeekPlan<'c>,
    options: &PlanOptions,
    rng: &mut R,
) -> Vec<BatchNote> {
    if !options.batch {
        return Vec::new();
    }

    let bases: Vec<&'c Recipe> = catalog
        .bases()
        .filter(|r| admits(r, options, rng))
        .collect();
    let Some(base) = bases.choose(rng).copied() else {
        debug!("No batch base admitted by current options");
        return Vec::new();
    };

    let uses: Vec<&'c Recipe> = catalog
        .uses_of(base.id)
        .filter(|r| admits(r, options, rng))
        .collect();
    if uses.len() < 2 {
        debug!(
            base = %base.name,
            uses = uses.len(),
            "Not enough reuse recipes for batch linkage"
        );
        return Vec::new();
    }

    for (recipe, (day, slot)) in [
        (base, BASE_SLOT),
        (uses[0], FIRST_USE_SLOT),
        (uses[1], SECOND_USE_SLOT),
    ] {
        if let Some(day_plan) = plan.day_mut(day) {
            day_plan.set_slot(slot, recipe);
        }
    }

    info!(base = %base.name, uses = uses.len(), "Applied batch linkage");
    vec![BatchNote {
        base: base.name.clone(),
        uses: uses.iter().map(|r| r.name.clone()).collect(),
        schedule: BATCH_SCHEDULE.to_string(),
    }]
}

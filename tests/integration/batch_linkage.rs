//! Integration tests for batch-cooking linkage

use super::test_utils::{builtin, seeded, small_catalog};
use menuplan::generation::{generate, BATCH_SCHEDULE};
use menuplan::types::MealSlot;
use menuplan::PlanOptions;

#[test]
fn test_single_use_never_links() {
    let catalog = small_catalog(1);
    for seed in 0..50 {
        let out = generate(&catalog, &PlanOptions::default(), &mut seeded(seed));
        assert!(out.meta.batches.is_empty(), "seed {}", seed);
        assert!(out
            .plan
            .days
            .iter()
            .all(|d| d.meals().all(|(_, r)| !r.is_batch_use())));
    }
}

#[test]
fn test_two_uses_always_link() {
    let catalog = small_catalog(2);
    for seed in 0..50 {
        let out = generate(&catalog, &PlanOptions::default(), &mut seeded(seed));
        assert_eq!(out.meta.batches.len(), 1, "seed {}", seed);

        let note = &out.meta.batches[0];
        assert_eq!(note.base, "Crema base");
        assert_eq!(note.uses, vec!["Crema uso 1", "Crema uso 2"]);
        assert_eq!(note.schedule, BATCH_SCHEDULE);

        let days = &out.plan.days;
        assert_eq!(days[0].slot(MealSlot::Dinner).unwrap().name, "Crema base");
        assert_eq!(days[2].slot(MealSlot::Dinner).unwrap().name, "Crema uso 1");
        assert_eq!(days[4].slot(MealSlot::Lunch).unwrap().name, "Crema uso 2");
    }
}

#[test]
fn test_note_lists_every_qualifying_use() {
    let catalog = small_catalog(4);
    let out = generate(&catalog, &PlanOptions::default(), &mut seeded(7));
    assert_eq!(out.meta.batches[0].uses.len(), 4);
    // Only the first two are placed.
    let placed = out
        .plan
        .days
        .iter()
        .flat_map(|d| d.meals())
        .filter(|(_, r)| r.is_batch_use())
        .count();
    assert_eq!(placed, 2);
}

#[test]
fn test_batch_off_skips_small_catalog_linkage() {
    let catalog = small_catalog(3);
    let options = PlanOptions {
        batch: false,
        ..PlanOptions::default()
    };
    let out = generate(&catalog, &options, &mut seeded(1));
    assert!(out.meta.batches.is_empty());
}

#[test]
fn test_builtin_linkage_positions() {
    let catalog = builtin();
    let mut linked = 0;
    for seed in 0..200 {
        let out = generate(&catalog, &PlanOptions::default(), &mut seeded(seed));
        let Some(note) = out.meta.batches.first() else {
            continue;
        };
        linked += 1;

        let base = catalog.by_name(&note.base).unwrap();
        assert!(base.is_batch_base());
        assert_eq!(out.plan.days[0].dinner.unwrap().id, base.id);

        let first_use = out.plan.days[2].dinner.unwrap();
        let second_use = out.plan.days[4].lunch.unwrap();
        assert_eq!(first_use.base_id(), Some(base.id));
        assert_eq!(second_use.base_id(), Some(base.id));
        assert_eq!(note.uses[0], first_use.name);
        assert_eq!(note.uses[1], second_use.name);
    }
    // Two of the three bundled bases have two uses each.
    assert!(linked > 80, "linked = {}", linked);
}

#[test]
fn test_builtin_chicken_base_never_links() {
    let catalog = builtin();
    for seed in 0..200 {
        let out = generate(&catalog, &PlanOptions::default(), &mut seeded(seed));
        assert!(out
            .meta
            .batches
            .iter()
            .all(|b| b.base != "Pollo asado simple (batch)"));
    }
}

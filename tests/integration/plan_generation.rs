//! Integration tests for plan generation invariants

use super::test_utils::{builtin, seeded, small_catalog};
use menuplan::filter::matches;
use menuplan::generation::{generate, Generator, DAYS_PER_WEEK};
use menuplan::types::MealSlot;
use menuplan::PlanOptions;
use std::collections::HashSet;
use std::sync::Arc;

fn option_grid() -> Vec<PlanOptions> {
    let mut grid = Vec::new();
    for bits in 0u8..128 {
        grid.push(PlanOptions {
            strict_fodmap: bits & 1 != 0,
            no_dairy: bits & 2 != 0,
            no_gluten: bits & 4 != 0,
            no_spicy: bits & 8 != 0,
            vegetarian: bits & 16 != 0,
            quick_bias: bits & 32 != 0,
            batch: bits & 64 != 0,
        });
    }
    grid
}

#[test]
fn test_every_option_combination_yields_seven_days() {
    let catalog = builtin();
    for (i, options) in option_grid().iter().enumerate() {
        let out = generate(&catalog, options, &mut seeded(i as u64));
        assert_eq!(out.plan.days.len(), DAYS_PER_WEEK, "options {:?}", options);
        for (n, day) in out.plan.days.iter().enumerate() {
            assert_eq!(day.day as usize, n + 1);
        }
    }
}

#[test]
fn test_every_planned_recipe_matches_filter() {
    let catalog = builtin();
    for (i, options) in option_grid().iter().enumerate() {
        let out = generate(&catalog, options, &mut seeded(1000 + i as u64));
        for day in &out.plan.days {
            for (_, recipe) in day.meals() {
                assert!(
                    matches(recipe, options),
                    "'{}' violates {:?}",
                    recipe.name,
                    options
                );
            }
        }
    }
}

#[test]
fn test_uses_recipes_only_at_batch_positions() {
    let catalog = builtin();
    for (i, options) in option_grid().iter().enumerate() {
        let out = generate(&catalog, options, &mut seeded(2000 + i as u64));
        for day in &out.plan.days {
            for (slot, recipe) in day.meals() {
                if recipe.is_batch_use() {
                    assert!(!out.meta.batches.is_empty());
                    assert!(
                        (day.day == 3 && slot == MealSlot::Dinner)
                            || (day.day == 5 && slot == MealSlot::Lunch),
                        "uses recipe '{}' at day {} {}",
                        recipe.name,
                        day.day,
                        slot
                    );
                }
            }
        }
    }
}

#[test]
fn test_batch_disabled_has_no_notes() {
    let catalog = builtin();
    let options = PlanOptions {
        batch: false,
        ..PlanOptions::default()
    };
    for seed in 0..50 {
        let out = generate(&catalog, &options, &mut seeded(seed));
        assert!(out.meta.batches.is_empty());
        assert!(out
            .plan
            .days
            .iter()
            .all(|d| d.meals().all(|(_, r)| !r.is_batch_use())));
    }
}

#[test]
fn test_two_breakfasts_cycle() {
    let catalog = small_catalog(0);
    for seed in 0..20 {
        let out = generate(&catalog, &PlanOptions::default(), &mut seeded(seed));
        let names: Vec<&str> = out
            .plan
            .days
            .iter()
            .map(|d| d.breakfast.unwrap().name.as_str())
            .collect();
        assert_ne!(names[0], names[1]);
        assert_eq!(names[0], names[2]);
        assert_eq!(names[1], names[3]);
        assert_eq!(names[0], names[6]);
    }
}

#[test]
fn test_large_pools_have_no_repeats_per_slot() {
    let catalog = builtin();
    for seed in 0..30 {
        let out = generate(&catalog, &PlanOptions { batch: false, ..Default::default() }, &mut seeded(seed));
        for slot in MealSlot::ALL {
            let names: HashSet<&str> = out
                .plan
                .days
                .iter()
                .filter_map(|d| d.slot(slot))
                .map(|r| r.name.as_str())
                .collect();
            assert_eq!(names.len(), DAYS_PER_WEEK, "slot {} repeated", slot);
        }
    }
}

#[test]
fn test_family_hint_count_matches_annotated_slots() {
    let catalog = builtin();
    for (i, options) in option_grid().iter().enumerate() {
        let out = generate(&catalog, options, &mut seeded(3000 + i as u64));
        let annotated = out
            .plan
            .days
            .iter()
            .flat_map(|d| d.meals())
            .filter(|(_, r)| r.family.is_some())
            .count();
        assert_eq!(out.meta.family.len(), annotated);
    }
}

#[test]
fn test_protein_variety_across_dinners() {
    // Inverse-frequency weighting should keep a week of dinners from
    // collapsing onto a single protein.
    let catalog = builtin();
    let options = PlanOptions {
        batch: false,
        ..PlanOptions::default()
    };
    for seed in 0..30 {
        let out = generate(&catalog, &options, &mut seeded(seed));
        let proteins: HashSet<_> = out
            .plan
            .days
            .iter()
            .filter_map(|d| d.dinner)
            .map(|r| r.protein)
            .collect();
        assert!(proteins.len() >= 3, "seed {} proteins {:?}", seed, proteins);
    }
}

#[test]
fn test_generator_shares_catalog() {
    let catalog = Arc::new(builtin());
    let a = Generator::new(Arc::clone(&catalog));
    let b = Generator::new(Arc::clone(&catalog));
    assert_eq!(Arc::strong_count(&catalog), 3);

    let out_a = a.generate_with_rng(&PlanOptions::default(), &mut seeded(5));
    let out_b = b.generate_with_rng(&PlanOptions::default(), &mut seeded(5));
    assert_eq!(out_a, out_b);
}

#[test]
fn test_unseeded_generation_still_valid() {
    let generator = Generator::new(Arc::new(builtin()));
    let options = PlanOptions::demo();
    for _ in 0..10 {
        let out = generator.generate(&options);
        assert_eq!(out.plan.days.len(), DAYS_PER_WEEK);
        assert!(out
            .plan
            .days
            .iter()
            .all(|d| d.meals().all(|(_, r)| matches(r, &options))));
    }
}

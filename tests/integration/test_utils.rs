//! Shared test utilities for integration tests
//!
//! Catalog fixtures and seeded random sources so stochastic behavior can be
//! asserted deterministically.

use menuplan::catalog::{Catalog, RecipeSpec};
use menuplan::types::{MealSlot, Protein, Tag};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn builtin() -> Catalog {
    Catalog::builtin().unwrap()
}

pub fn catalog_from(specs: Vec<RecipeSpec>) -> Catalog {
    let mut builder = Catalog::builder();
    builder.extend(specs);
    builder.build().unwrap()
}

/// Small catalog: two breakfasts, three lunches, three dinners, one batch base
/// with `uses` reuse recipes.
pub fn small_catalog(uses: usize) -> Catalog {
    let mut specs = vec![
        RecipeSpec::new("Avena", MealSlot::Breakfast, &[Tag::LowFodmap, Tag::Quick], Protein::None),
        RecipeSpec::new("Huevos", MealSlot::Breakfast, &[Tag::LowFodmap], Protein::Eggs),
        RecipeSpec::new("Arroz con pollo", MealSlot::Lunch, &[Tag::LowFodmap], Protein::Chicken),
        RecipeSpec::new("Ensalada de atún", MealSlot::Lunch, &[Tag::LowFodmap], Protein::Fish),
        RecipeSpec::new("Tofu salteado", MealSlot::Lunch, &[Tag::LowFodmap, Tag::Vegetarian], Protein::Tofu),
        RecipeSpec::new("Merluza", MealSlot::Dinner, &[Tag::LowFodmap], Protein::Fish)
            .family("sin ajo", "alioli aparte"),
        RecipeSpec::new("Ternera", MealSlot::Dinner, &[Tag::LowFodmap], Protein::Beef),
        RecipeSpec::new("Crema base", MealSlot::Dinner, &[Tag::LowFodmap], Protein::None).batch_base(),
    ];
    for i in 0..uses {
        specs.push(
            RecipeSpec::new(format!("Crema uso {}", i + 1), MealSlot::Dinner, &[Tag::LowFodmap], Protein::Eggs)
                .uses("Crema base", "Una porción de base"),
        );
    }
    catalog_from(specs)
}

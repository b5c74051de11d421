//! CLI presentation: catalog formatters. Plan output goes through `crate::render`.

use crate::catalog::{Catalog, Recipe};
use crate::error::ApiError;
use crate::types::MealSlot;
use comfy_table::Table;
use serde::Serialize;

pub fn format_catalog_list_text(recipes: &[&Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Id", "Meal", "Name", "Protein", "Tags", "Batch"]);
    for recipe in recipes {
        let tags: Vec<&str> = recipe.tags.iter().map(|t| t.as_str()).collect();
        let batch = match recipe.base_id() {
            Some(base) => format!("uses {}", base),
            None if recipe.is_batch_base() => "base".to_string(),
            None => String::new(),
        };
        table.add_row(vec![
            recipe.id.to_string(),
            recipe.meal.to_string(),
            recipe.name.clone(),
            recipe.protein.to_string(),
            tags.join(", "),
            batch,
        ]);
    }
    format!("{}\n{} recipes", table, recipes.len())
}

pub fn format_catalog_list_json(recipes: &[&Recipe]) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(recipes)?)
}

/// Per-base batch coverage reported by `catalog validate`.
#[derive(Debug, Serialize)]
pub struct BaseCoverage {
    pub base: String,
    pub uses: usize,
}

pub fn batch_coverage(catalog: &Catalog) -> Vec<BaseCoverage> {
    catalog
        .bases()
        .map(|base| BaseCoverage {
            base: base.name.clone(),
            uses: catalog.uses_of(base.id).count(),
        })
        .collect()
}

pub fn format_catalog_validate(catalog: &Catalog) -> String {
    let mut s = format!("Catalog valid:\n  Recipes: {}", catalog.len());
    for slot in MealSlot::ALL {
        s.push_str(&format!("\n  {}: {}", slot, catalog.by_meal(slot).count()));
    }

    let coverage = batch_coverage(catalog);
    if !coverage.is_empty() {
        s.push_str("\n\nBatch bases:");
        for entry in &coverage {
            s.push_str(&format!("\n  - {} ({} uses)", entry.base, entry.uses));
        }
    }

    let unlinkable: Vec<&BaseCoverage> = coverage.iter().filter(|c| c.uses < 2).collect();
    if !unlinkable.is_empty() {
        s.push_str(&format!("\n\nWarnings ({}):", unlinkable.len()));
        for entry in unlinkable {
            s.push_str(&format!(
                "\n  - '{}' has fewer than 2 uses and will never be linked",
                entry.base
            ));
        }
    }
    s
}

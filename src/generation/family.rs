//! Family-variant hints derived from a finished plan.

use super::plan::{FamilyHint, WeekPlan};

/// One hint per planned meal carrying a family variant, in day then
/// breakfast/lunch/dinner order.
pub fn family_hints(plan: &WeekPlan<'_>) -> Vec<FamilyHint> {
    plan.days
        .iter()
        .flat_map(|day| {
            day.meals().filter_map(move |(meal, recipe)| {
                recipe.family.as_ref().map(|variant| FamilyHint {
                    day: day.day,
                    meal,
                    name: recipe.name.clone(),
                    self_note: variant.self_note.clone(),
                    family_note: variant.family_note.clone(),
                })
            })
        })
        .collect()
}

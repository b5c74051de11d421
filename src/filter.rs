//! Dietary filter predicates.

use crate::catalog::Recipe;
use crate::options::PlanOptions;
use crate::types::Tag;
use rand::Rng;

/// Probability that quick bias drops a non-quick candidate during a pool build.
pub const QUICK_BIAS_REJECT_PROBABILITY: f64 = 0.35;

/// Deterministic dietary predicate.
pub fn matches(recipe: &Recipe, options: &PlanOptions) -> bool {
    (!options.strict_fodmap || recipe.has_tag(Tag::LowFodmap))
        && (!options.no_dairy || recipe.has_tag(Tag::DairyFree))
        && (!options.no_gluten || recipe.has_tag(Tag::GlutenFree))
        && (!options.no_spicy || recipe.has_tag(Tag::SpicyFree))
        && (!options.vegetarian
            || recipe.has_tag(Tag::Vegetarian)
            || recipe.protein.is_vegetarian_safe())
}

/// Pool-construction predicate: [`matches`] plus the quick-bias soft rejection.
///
/// With quick bias on, a recipe without the quick tag is dropped with
/// probability [`QUICK_BIAS_REJECT_PROBABILITY`]. The roll is taken on every
/// call, so the same recipe may be admitted in one pool build and not the next.
pub fn admits<R: Rng + ?Sized>(recipe: &Recipe, options: &PlanOptions, rng: &mut R) -> bool {
    if !matches(recipe, options) {
        return false;
    }
    if options.quick_bias
        && !recipe.has_tag(Tag::Quick)
        && rng.gen_bool(QUICK_BIAS_REJECT_PROBABILITY)
    {
        return false;
    }
    true
}

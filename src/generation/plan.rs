//! Generated plan structures: the week grid plus batch and family metadata.

use crate::catalog::Recipe;
use crate::types::MealSlot;
use serde::Serialize;

/// Number of days in a generated plan.
pub const DAYS_PER_WEEK: usize = 7;

/// One day of the plan. Slots are `None` only when the catalog had no
/// eligible recipe for that meal type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan<'c> {
    /// 1-based day ordinal.
    pub day: u8,
    pub breakfast: Option<&'c Recipe>,
    pub lunch: Option<&'c Recipe>,
    pub dinner: Option<&'c Recipe>,
}

impl<'c> DayPlan<'c> {
    pub fn slot(&self, slot: MealSlot) -> Option<&'c Recipe> {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    pub fn set_slot(&mut self, slot: MealSlot, recipe: &'c Recipe) {
        let target = match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        };
        *target = Some(recipe);
    }

    /// Filled slots in breakfast, lunch, dinner order.
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &'c Recipe)> + '_ {
        MealSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.slot(slot).map(|r| (slot, r)))
    }
}

/// Seven ordered days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekPlan<'c> {
    pub days: Vec<DayPlan<'c>>,
}

impl<'c> WeekPlan<'c> {
    /// Lay out per-slot picks over the week, cycling when a slot has fewer
    /// than seven distinct picks.
    pub fn from_picks(
        breakfasts: &[&'c Recipe],
        lunches: &[&'c Recipe],
        dinners: &[&'c Recipe],
    ) -> Self {
        let cycle = |picks: &[&'c Recipe], i: usize| -> Option<&'c Recipe> {
            if picks.is_empty() {
                None
            } else {
                Some(picks[i % picks.len()])
            }
        };

        let days = (0..DAYS_PER_WEEK)
            .map(|i| DayPlan {
                day: (i + 1) as u8,
                breakfast: cycle(breakfasts, i),
                lunch: cycle(lunches, i),
                dinner: cycle(dinners, i),
            })
            .collect();
        Self { days }
    }

    /// Mutable access by 1-based day ordinal.
    pub fn day_mut(&mut self, day: u8) -> Option<&mut DayPlan<'c>> {
        let index = (day as usize).checked_sub(1)?;
        self.days.get_mut(index)
    }
}

/// Batch-cooking summary: one base cooked in bulk and the recipes reusing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchNote {
    pub base: String,
    pub uses: Vec<String>,
    pub schedule: String,
}

/// Family-variant annotation for one planned meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyHint {
    pub day: u8,
    pub meal: MealSlot,
    pub name: String,
    pub self_note: String,
    pub family_note: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlanMeta {
    pub batches: Vec<BatchNote>,
    pub family: Vec<FamilyHint>,
}

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPlan<'c> {
    pub plan: WeekPlan<'c>,
    pub meta: PlanMeta,
}

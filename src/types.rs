//! Core value types shared across the catalog, filter and generator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable recipe identifier assigned at catalog construction (`r1`, `r2`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u32);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// One of the three meal slots of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Slots in day order.
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }

    /// Label used in the plain-text report.
    pub fn report_label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Desayuno",
            MealSlot::Lunch => "Comida",
            MealSlot::Dinner => "Cena",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            other => Err(format!(
                "Unknown meal slot: {} (must be 'breakfast', 'lunch' or 'dinner')",
                other
            )),
        }
    }
}

/// Dietary label attached to a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    LowFodmap,
    GlutenFree,
    DairyFree,
    SpicyFree,
    Vegetarian,
    Quick,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::LowFodmap => "low-fodmap",
            Tag::GlutenFree => "gluten-free",
            Tag::DairyFree => "dairy-free",
            Tag::SpicyFree => "spicy-free",
            Tag::Vegetarian => "vegetarian",
            Tag::Quick => "quick",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main protein of a recipe; drives lunch/dinner variety weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Protein {
    Fish,
    Chicken,
    Turkey,
    Beef,
    Pork,
    Eggs,
    Legumes,
    Tofu,
    Tempeh,
    Mixed,
    #[default]
    None,
}

impl Protein {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protein::Fish => "fish",
            Protein::Chicken => "chicken",
            Protein::Turkey => "turkey",
            Protein::Beef => "beef",
            Protein::Pork => "pork",
            Protein::Eggs => "eggs",
            Protein::Legumes => "legumes",
            Protein::Tofu => "tofu",
            Protein::Tempeh => "tempeh",
            Protein::Mixed => "mixed",
            Protein::None => "none",
        }
    }

    /// Proteins acceptable for vegetarian plans even without the vegetarian tag.
    pub fn is_vegetarian_safe(&self) -> bool {
        matches!(self, Protein::Eggs | Protein::None)
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Batch-cooking role, with the resolved base reference for `Uses`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", tag = "role", content = "base")]
pub enum BatchRole {
    #[default]
    None,
    Base,
    Uses(RecipeId),
}

/// Alternate preparation notes for a meal shared with the household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyVariant {
    pub self_note: String,
    pub family_note: String,
}

impl FamilyVariant {
    pub fn new(self_note: impl Into<String>, family_note: impl Into<String>) -> Self {
        Self {
            self_note: self_note.into(),
            family_note: family_note.into(),
        }
    }
}

//! Plan options: dietary constraints and generation toggles.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Constraints and toggles for one plan generation.
///
/// Every dietary flag defaults to `false` ("no constraint"). `batch` defaults
/// to `true`: batch linkage only turns off when explicitly disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanOptions {
    #[serde(alias = "strictFODMAP")]
    pub strict_fodmap: bool,
    #[serde(alias = "noDairy")]
    pub no_dairy: bool,
    #[serde(alias = "noGluten")]
    pub no_gluten: bool,
    #[serde(alias = "noSpicy")]
    pub no_spicy: bool,
    pub vegetarian: bool,
    #[serde(alias = "quickBias")]
    pub quick_bias: bool,
    pub batch: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            strict_fodmap: false,
            no_dairy: false,
            no_gluten: false,
            no_spicy: false,
            vegetarian: false,
            quick_bias: false,
            batch: true,
        }
    }
}

impl PlanOptions {
    /// Fully constrained preset used for demos.
    pub fn demo() -> Self {
        Self {
            strict_fodmap: true,
            no_dairy: true,
            no_gluten: true,
            no_spicy: true,
            vegetarian: false,
            quick_bias: true,
            batch: true,
        }
    }

    /// Derive options from free-text preference labels, as collected by a
    /// signup form (checkbox values plus an optional persona description).
    ///
    /// Starts from quick bias and batch cooking enabled; each label turns on
    /// the constraint it mentions. Matching ignores case and accents.
    pub fn from_preferences<S: AsRef<str>>(prefs: &[S], persona: Option<&str>) -> Self {
        let mut options = Self {
            quick_bias: true,
            batch: true,
            ..Self::default()
        };

        for pref in prefs.iter().map(|p| fold_label(p.as_ref())) {
            if pref.contains("fodmap") {
                options.strict_fodmap = true;
            }
            if pref.contains("lacteos") {
                options.no_dairy = true;
            }
            if pref.contains("gluten") {
                options.no_gluten = true;
            }
            if pref.contains("picante") {
                options.no_spicy = true;
            }
        }

        if persona.map(fold_label).is_some_and(|p| p.contains("recien")) {
            options.strict_fodmap = true;
        }

        options
    }
}

/// Lowercase and strip diacritics so "Lácteos" and "lacteos" compare equal.
fn fold_label(label: &str) -> String {
    label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

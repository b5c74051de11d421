//! Plan renderers: consumers of a generated plan that produce display output.

use crate::catalog::Recipe;
use crate::error::ApiError;
use crate::generation::GeneratedPlan;
use crate::report::serialize_plan_text;
use crate::types::{MealSlot, RecipeId};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::collections::HashSet;
use std::str::FromStr;

/// Output shape for a rendered plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(ApiError::InvalidOption(format!(
                "Unknown output format: {} (must be 'text', 'table' or 'json')",
                other
            ))),
        }
    }
}

/// Turns a generated plan into display output. Renderers never feed back
/// into generation.
pub trait PlanRenderer {
    fn render(&self, generated: &GeneratedPlan<'_>) -> Result<String, ApiError>;
}

/// The plain-text submission report.
pub struct TextRenderer;

impl PlanRenderer for TextRenderer {
    fn render(&self, generated: &GeneratedPlan<'_>) -> Result<String, ApiError> {
        Ok(serialize_plan_text(generated))
    }
}

/// Pretty-printed JSON of `{plan, meta}`.
pub struct JsonRenderer;

impl PlanRenderer for JsonRenderer {
    fn render(&self, generated: &GeneratedPlan<'_>) -> Result<String, ApiError> {
        Ok(serde_json::to_string_pretty(generated)?)
    }
}

/// Day grid table followed by batch, family and preparation-note sections.
pub struct TableRenderer {
    pub color: bool,
}

impl TableRenderer {
    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl PlanRenderer for TableRenderer {
    fn render(&self, generated: &GeneratedPlan<'_>) -> Result<String, ApiError> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Día", "Desayuno", "Comida", "Cena"]);
        for day in &generated.plan.days {
            let mut row = vec![day.day.to_string()];
            row.extend(MealSlot::ALL.iter().map(|slot| {
                day.slot(*slot)
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| "-".to_string())
            }));
            table.add_row(row);
        }

        let mut out = format!("{}\n{}", self.heading("Menú semanal generado"), table);

        if !generated.meta.batches.is_empty() {
            out.push_str(&format!("\n\n{}", self.heading("Batch-cooking")));
            for note in &generated.meta.batches {
                out.push_str(&format!(
                    "\n  • {} → {}. {}",
                    note.base,
                    note.uses.join(" + "),
                    note.schedule
                ));
            }
        }

        if !generated.meta.family.is_empty() {
            out.push_str(&format!("\n\n{}", self.heading("Variaciones para familia")));
            for hint in &generated.meta.family {
                out.push_str(&format!(
                    "\n  • Día {} ({}): {}. Tú: {}. Familia: {}.",
                    hint.day, hint.meal, hint.name, hint.self_note, hint.family_note
                ));
            }
        }

        let noted = noted_recipes(generated);
        if !noted.is_empty() {
            out.push_str(&format!("\n\n{}", self.heading("Notas")));
            for recipe in noted {
                for note in recipe.notes.iter().chain(recipe.uses_note.iter()) {
                    out.push_str(&format!("\n  • {}: {}", recipe.name, note));
                }
            }
        }

        Ok(out)
    }
}

/// Planned recipes carrying preparation notes, once each, in plan order.
fn noted_recipes<'c>(generated: &GeneratedPlan<'c>) -> Vec<&'c Recipe> {
    let mut seen: HashSet<RecipeId> = HashSet::new();
    generated
        .plan
        .days
        .iter()
        .flat_map(|day| day.meals().map(|(_, r)| r))
        .filter(|r| r.notes.is_some() || r.uses_note.is_some())
        .filter(|r| seen.insert(r.id))
        .collect()
}

/// Renderer for `format`.
pub fn renderer(format: OutputFormat, color: bool) -> Box<dyn PlanRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Table => Box::new(TableRenderer { color }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

//! Plain-text plan report.
//!
//! The report is the payload attached to a form submission: a stable,
//! line-oriented rendering of the week, the batch-cooking notes and the family
//! variants. Output depends only on the plan, so serializing twice yields the
//! same text.

use crate::catalog::Recipe;
use crate::generation::GeneratedPlan;

/// First line of every report.
pub const REPORT_TITLE: &str = "COMIBIOTA - Menú semanal generado";

const EMPTY_SLOT: &str = "-";

/// Serialize a generated plan into the multi-line text report.
pub fn serialize_plan_text(generated: &GeneratedPlan<'_>) -> String {
    let mut lines = vec![REPORT_TITLE.to_string()];

    for day in &generated.plan.days {
        lines.push(format!("Día {}:", day.day));
        lines.push(format!("  Desayuno: {}", slot_name(day.breakfast)));
        lines.push(format!("  Comida:   {}", slot_name(day.lunch)));
        lines.push(format!("  Cena:     {}", slot_name(day.dinner)));
    }

    if !generated.meta.batches.is_empty() {
        lines.push("Batch-cooking:".to_string());
        for note in &generated.meta.batches {
            lines.push(format!("  Base: {}", note.base));
            lines.push(format!("  Reutiliza: {}", note.uses.join(" + ")));
            lines.push(format!("  Agenda: {}", note.schedule));
        }
    }

    if !generated.meta.family.is_empty() {
        lines.push("Variaciones familia:".to_string());
        for hint in &generated.meta.family {
            lines.push(format!(
                "  Día {} {}: {} — Tú: {} | Familia: {}",
                hint.day, hint.meal, hint.name, hint.self_note, hint.family_note
            ));
        }
    }

    lines.join("\n")
}

fn slot_name(recipe: Option<&Recipe>) -> &str {
    recipe.map(|r| r.name.as_str()).unwrap_or(EMPTY_SLOT)
}

//! Integration tests for the plain-text plan report

use super::test_utils::{builtin, seeded, small_catalog};
use menuplan::generation::generate;
use menuplan::report::{serialize_plan_text, REPORT_TITLE};
use menuplan::PlanOptions;

#[test]
fn test_serialization_is_idempotent() {
    let catalog = builtin();
    for seed in 0..20 {
        let out = generate(&catalog, &PlanOptions::demo(), &mut seeded(seed));
        assert_eq!(serialize_plan_text(&out), serialize_plan_text(&out));
    }
}

#[test]
fn test_report_sections_follow_meta() {
    let catalog = small_catalog(2);
    let out = generate(&catalog, &PlanOptions::default(), &mut seeded(3));
    let text = serialize_plan_text(&out);

    assert!(text.starts_with(REPORT_TITLE));
    assert_eq!(text.matches("Día ").count() - out.meta.family.len(), 7);
    assert!(text.contains("\nBatch-cooking:\n  Base: Crema base\n  Reutiliza: Crema uso 1 + Crema uso 2\n"));
    assert!(text.contains("\n  Cena:     Crema base\n"));
}

#[test]
fn test_report_family_lines() {
    let catalog = small_catalog(0);
    let out = generate(&catalog, &PlanOptions::default(), &mut seeded(11));
    let text = serialize_plan_text(&out);

    let family_lines: Vec<&str> = text
        .lines()
        .skip_while(|l| *l != "Variaciones familia:")
        .skip(1)
        .collect();
    assert_eq!(family_lines.len(), out.meta.family.len());
    for (line, hint) in family_lines.iter().zip(&out.meta.family) {
        assert_eq!(
            *line,
            format!(
                "  Día {} dinner: Merluza — Tú: sin ajo | Familia: alioli aparte",
                hint.day
            )
        );
    }
}

#[test]
fn test_report_without_batches_omits_section() {
    let catalog = small_catalog(1);
    let out = generate(&catalog, &PlanOptions::default(), &mut seeded(2));
    assert!(!serialize_plan_text(&out).contains("Batch-cooking"));
}

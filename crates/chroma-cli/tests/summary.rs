//! Table layouts produced for the CLI.

use chroma_cli::summary::{
    contrast_table, findings_table, harmony_table, palette_table, wcag_label,
};
use chroma_core::{FixedClock, GenerationRequest, PaletteGenerator};
use chroma_harmony::generate_harmony;
use chroma_model::{HarmonyType, HslColor, PaletteMode};
use chroma_validate::{check_compatibility, validate_harmony, validate_palette};
use chrono::{TimeZone, Utc};
use comfy_table::{Cell, Table};

fn header(table: &Table) -> Vec<String> {
    table
        .header()
        .map(|row| row.cell_iter().map(Cell::content).collect())
        .unwrap_or_default()
}

#[test]
fn palette_table_lists_the_four_groups() {
    let clock = FixedClock(
        Utc.timestamp_opt(1_760_000_000, 0)
            .single()
            .expect("valid instant"),
    );
    let palette = PaletteGenerator::builtin()
        .with_clock(clock)
        .generate(&GenerationRequest::new("ocean breeze").with_seed(2));
    let table = palette_table(&palette);
    insta::assert_json_snapshot!(header(&table), @r#"
    [
      "Role",
      "Swatch",
      "Base",
      "200",
      "300",
      "Description"
    ]
    "#);
    assert_eq!(table.row_count(), 4);
}

#[test]
fn harmony_table_has_one_row_per_role() {
    let harmony = generate_harmony(
        HslColor::new(200.0, 60.0, 50.0),
        HarmonyType::Triadic,
        PaletteMode::Light,
    );
    let table = harmony_table(&harmony);
    assert_eq!(table.row_count(), 5);
    assert_eq!(header(&table), ["Role", "Swatch", "Hex", "HSL"]);
}

#[test]
fn contrast_table_reports_the_wcag_level() {
    let black = HslColor::new(0.0, 0.0, 0.0);
    let white = HslColor::new(0.0, 0.0, 100.0);
    let compatibility = check_compatibility(&black, &white);
    let table = contrast_table(&black, &white, &compatibility);
    assert_eq!(header(&table), ["Field", "Value"]);
    assert_eq!(wcag_label(compatibility.contrast), "AAA");
}

#[test]
fn findings_table_is_omitted_when_clean() {
    let validation = validate_palette(&[]);
    assert!(findings_table(&validation, None).is_none());
}

#[test]
fn findings_table_lists_validation_issues() {
    let red = HslColor::new(0.0, 90.0, 50.0);
    let harmony = chroma_model::ColorHarmony::from_array([red; 5]);
    let validation = validate_harmony(&harmony);
    let table = findings_table(&validation, None).expect("findings present");
    assert_eq!(
        table.row_count(),
        validation.issues.len() + validation.warnings.len()
    );
}

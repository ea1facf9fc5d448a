//! Table rendering for palettes, analyses and diagnostics.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use chroma_model::{
    ColorHarmony, ContextualWeights, HarmonyRole, HslColor, IntentAnalysis, PromptAnalysis,
    SemanticPalette,
};
use chroma_validate::{CoherenceReport, Compatibility, PaletteValidation};

pub fn palette_table(palette: &SemanticPalette) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Swatch"),
        header_cell("Base"),
        header_cell("200"),
        header_cell("300"),
        header_cell("Description"),
    ]);
    apply_summary_table_style(&mut table);
    for group in palette.colors.iter() {
        table.add_row(vec![
            role_cell(&group.name),
            swatch_cell(&group.base),
            Cell::new(&group.base),
            Cell::new(&group.variations.light),
            Cell::new(&group.variations.lighter),
            Cell::new(&group.description),
        ]);
    }
    table
}

pub fn metadata_table(palette: &SemanticPalette) -> Table {
    let metadata = &palette.metadata;
    let accessibility = &metadata.accessibility;
    let mut table = key_value_table();
    add_pair(&mut table, "Name", palette.name.clone());
    add_pair(&mut table, "Id", palette.id.clone());
    add_pair(&mut table, "Harmony", metadata.harmony.to_string());
    add_pair(&mut table, "Mood", metadata.mood.to_string());
    add_pair(&mut table, "Style", metadata.style.as_str().to_string());
    add_pair(&mut table, "Language", metadata.language.to_string());
    add_pair(&mut table, "Confidence", format!("{:.2}", metadata.confidence));
    add_pair(
        &mut table,
        "Text contrast",
        format!(
            "{:.2}:1 ({})",
            accessibility.text_contrast,
            wcag_label(accessibility.text_contrast)
        ),
    );
    add_pair(
        &mut table,
        "Validation",
        format!(
            "{:.2}{}",
            accessibility.validation_score,
            if accessibility.auto_fixed {
                " (auto-fixed)"
            } else {
                ""
            }
        ),
    );
    add_pair(
        &mut table,
        "Emotion",
        metadata.emotional_profile.dominant_trait.clone(),
    );
    add_pair(&mut table, "Tags", metadata.tags.join(", "));
    table
}

pub fn analysis_table(
    analysis: &PromptAnalysis,
    weights: &ContextualWeights,
    intent: &IntentAnalysis,
) -> Table {
    let mut table = key_value_table();
    add_pair(
        &mut table,
        "Language",
        format!("{} ({:.2})", analysis.language, analysis.language_confidence),
    );
    add_pair(&mut table, "Confidence", format!("{:.2}", analysis.confidence));
    add_pair(&mut table, "Mood", analysis.mood.to_string());
    add_pair(
        &mut table,
        "Harmony",
        if analysis.explicit_harmony {
            format!("{} (explicit)", analysis.harmony_type)
        } else {
            analysis.harmony_type.to_string()
        },
    );
    add_pair(&mut table, "Keywords", list(&analysis.keywords));
    add_pair(&mut table, "Emotions", list(&analysis.emotions));
    add_pair(&mut table, "Industries", list(&analysis.industries));
    add_pair(&mut table, "Objects", list(&analysis.objects));
    add_pair(&mut table, "Compounds", list(&analysis.compound_concepts));
    add_pair(&mut table, "Context tags", list(&analysis.context_tags));
    add_pair(
        &mut table,
        "Use case",
        analysis.use_case.clone().unwrap_or_else(|| "-".to_string()),
    );
    let biases = &analysis.biases;
    add_pair(
        &mut table,
        "Biases",
        format!(
            "intensity {:+.2}, temperature {:+.2}, saturation {:+.2}, lightness {:+.2}",
            biases.intensity, biases.temperature, biases.saturation, biases.lightness
        ),
    );
    add_pair(&mut table, "Theme", weights.dominant_theme.clone());
    add_pair(
        &mut table,
        "Intention",
        format!("{:.2}", weights.intention_score),
    );
    add_pair(
        &mut table,
        "Intent",
        format!(
            "{} ({:.2}), suggests {}",
            intent.primary_intent, intent.confidence, intent.suggested_harmony
        ),
    );
    table
}

/// Extracted colors after contextual re-weighting.
pub fn color_matches_table(weights: &ContextualWeights) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Term"),
        header_cell("Swatch"),
        header_cell("Match"),
        header_cell("Weight"),
        header_cell("HSL"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for color in &weights.adjusted_colors {
        let hsl = color.color.to_hsl();
        table.add_row(vec![
            Cell::new(&color.original_term),
            swatch_cell(&hsl.to_hex()),
            Cell::new(color.match_type.as_str()),
            Cell::new(format!("{:.2}", color.weight)),
            Cell::new(hsl.to_string()),
        ]);
    }
    table
}

pub fn harmony_table(harmony: &ColorHarmony) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Swatch"),
        header_cell("Hex"),
        header_cell("HSL"),
    ]);
    apply_table_style(&mut table);
    for role in HarmonyRole::ALL {
        let color = harmony.get(role);
        let hex = color.to_hex();
        table.add_row(vec![
            role_cell(role.as_str()),
            swatch_cell(&hex),
            Cell::new(&hex),
            Cell::new(color.to_string()),
        ]);
    }
    table
}

pub fn contrast_table(
    foreground: &HslColor,
    background: &HslColor,
    compatibility: &Compatibility,
) -> Table {
    let ratio = compatibility.contrast;
    let mut table = key_value_table();
    add_pair(&mut table, "Foreground", foreground.to_hex());
    add_pair(&mut table, "Background", background.to_hex());
    add_pair(&mut table, "Contrast", format!("{ratio:.2}:1"));
    add_pair(&mut table, "WCAG", wcag_label(ratio).to_string());
    add_pair(
        &mut table,
        "Compatibility",
        format!(
            "{:.2} ({})",
            compatibility.score,
            if compatibility.compatible {
                "compatible"
            } else {
                "incompatible"
            }
        ),
    );
    add_pair(&mut table, "Warnings", list(&compatibility.warnings));
    table
}

/// Validation issues and warnings followed by coherence findings. `None`
/// when there is nothing to report.
pub fn findings_table(
    validation: &PaletteValidation,
    coherence: Option<&CoherenceReport>,
) -> Option<Table> {
    let mut rows: Vec<(&str, &str, Color)> = Vec::new();
    for issue in &validation.issues {
        rows.push(("validation", issue, Color::Red));
    }
    for warning in &validation.warnings {
        rows.push(("validation", warning, Color::Yellow));
    }
    if let Some(report) = coherence {
        for issue in &report.issues {
            rows.push(("coherence", issue, Color::Red));
        }
        for suggestion in &report.suggestions {
            rows.push(("suggestion", suggestion, Color::DarkGrey));
        }
    }
    if rows.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Source"), header_cell("Finding")]);
    apply_issue_table_style(&mut table);
    for (source, message, color) in rows {
        table.add_row(vec![Cell::new(source).fg(color), Cell::new(message)]);
    }
    Some(table)
}

pub fn wcag_label(ratio: f64) -> &'static str {
    if ratio >= chroma_model::WCAG_AAA_NORMAL {
        "AAA"
    } else if ratio >= chroma_model::WCAG_AA_NORMAL {
        "AA"
    } else if ratio >= chroma_model::WCAG_AA_LARGE {
        "AA large text"
    } else {
        "fail"
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn key_value_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table
}

fn add_pair(table: &mut Table, key: &str, value: String) {
    table.add_row(vec![
        Cell::new(key).add_attribute(Attribute::Bold),
        Cell::new(value),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn list(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn role_cell(role: &str) -> Cell {
    Cell::new(role)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn swatch_cell(hex: &str) -> Cell {
    let (r, g, b) = HslColor::from_hex_lossy(hex).to_rgb();
    Cell::new("      ").bg(Color::Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wcag_labels_follow_thresholds() {
        assert_eq!(wcag_label(21.0), "AAA");
        assert_eq!(wcag_label(4.5), "AA");
        assert_eq!(wcag_label(3.2), "AA large text");
        assert_eq!(wcag_label(1.5), "fail");
    }
}

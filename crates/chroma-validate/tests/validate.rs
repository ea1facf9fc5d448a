use chroma_model::{ColorHarmony, HslColor, WCAG_AA_NORMAL};
use chroma_validate::{
    ContrastReport, auto_fix_harmony, auto_fix_palette, check_compatibility, ensure_accessibility,
    validate_harmony, validate_palette,
};
use proptest::prelude::*;

fn color() -> impl Strategy<Value = HslColor> {
    (0.0f64..360.0, 0.0f64..=100.0, 0.0f64..=100.0).prop_map(|(h, s, l)| HslColor::new(h, s, l))
}

#[test]
fn close_reds_report_every_fired_rule() {
    let result = check_compatibility(
        &HslColor::new(0.0, 90.0, 50.0),
        &HslColor::new(8.0, 90.0, 52.0),
    );
    insta::assert_json_snapshot!(result.warnings, @r#"
    [
      "too similar in hue",
      "both colors oversaturated",
      "lightness too similar",
      "insufficient contrast"
    ]
    "#);
    assert!(result.score <= 0.8);
}

#[test]
fn harmony_findings_use_role_names() {
    let harmony = ColorHarmony {
        primary: HslColor::new(210.0, 70.0, 45.0),
        secondary: HslColor::new(240.0, 60.0, 53.0),
        accent: HslColor::new(180.0, 63.0, 40.0),
        background: HslColor::new(210.0, 10.0, 96.0),
        text: HslColor::new(210.0, 14.0, 10.0),
    };
    let result = validate_harmony(&harmony);
    assert!(
        result
            .warnings
            .iter()
            .any(|w| w.starts_with("background/text:"))
    );
    assert!(result.warnings.iter().all(|w| !w.starts_with('#')));

    let report = ContrastReport::measure(&harmony);
    assert!(report.wcag_aa());
    assert!(report.large_text_aa());
}

#[test]
fn empty_palette_is_trivially_valid() {
    let result = validate_palette(&[]);
    assert!(result.valid);
    assert_eq!(result.score, 1.0);
    assert!(auto_fix_palette(&[]).is_empty());
}

proptest! {
    #[test]
    fn accessibility_reaches_target_or_clamps(text in color(), background in color()) {
        let fixed = ensure_accessibility(text, background, WCAG_AA_NORMAL);
        let ratio = fixed.contrast_ratio(&background);
        prop_assert!(ratio >= WCAG_AA_NORMAL || fixed.l == 0.0 || fixed.l == 100.0);
        prop_assert_eq!(fixed.h, text.h);
        prop_assert_eq!(fixed.s, text.s);
    }

    #[test]
    fn auto_fix_keeps_values_in_range(colors in proptest::collection::vec(color(), 0..8)) {
        let fixed = auto_fix_palette(&colors);
        prop_assert_eq!(fixed.len(), colors.len());
        for (before, after) in colors.iter().zip(&fixed) {
            prop_assert_eq!(before.h, after.h);
            prop_assert!((0.0..=100.0).contains(&after.s));
            prop_assert!((0.0..=100.0).contains(&after.l));
        }
    }

    #[test]
    fn validation_score_is_bounded(colors in proptest::collection::vec(color(), 1..6)) {
        let result = validate_palette(&colors);
        prop_assert!((0.0..=1.0).contains(&result.score));
        if result.valid {
            prop_assert!(result.issues.len() < 3);
        }
    }

    #[test]
    fn harmony_fix_matches_palette_fix(a in color(), b in color(), c in color(), d in color(), e in color()) {
        let harmony = ColorHarmony::from_array([a, b, c, d, e]);
        let fixed = auto_fix_harmony(&harmony);
        prop_assert_eq!(fixed.to_array().to_vec(), auto_fix_palette(&harmony.to_array()));
    }
}

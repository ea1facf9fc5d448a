//! End-to-end generation scenarios.

use chrono::{TimeZone, Utc};
use chroma_core::{FixedClock, GenerationRequest, KnowledgeBase, PaletteGenerator};
use chroma_harmony::{SeedSource, derive_seed};
use chroma_validate::validate_coherence;
use chroma_model::{
    BaseColorSource, GenerationOptions, HarmonyType, HslColor, Mood, PaletteMode, WCAG_AA_NORMAL,
};
use proptest::prelude::*;

const EPOCH_SECONDS: i64 = 1_760_000_000;

fn clock(offset_seconds: i64) -> FixedClock {
    FixedClock(
        Utc.timestamp_opt(EPOCH_SECONDS + offset_seconds, 0)
            .single()
            .expect("valid instant"),
    )
}

fn generator() -> PaletteGenerator<'static> {
    PaletteGenerator::builtin().with_clock(clock(0))
}

fn hsl(hex: &str) -> HslColor {
    HslColor::from_hex(hex).expect("generated hex parses")
}

#[test]
fn cyberpunk_is_dark_and_complementary() {
    let request = GenerationRequest::new("cyberpunk neon electric city nights").with_seed(42);
    let report = generator().generate_with_diagnostics(&request);
    let palette = &report.palette;

    assert!(matches!(palette.metadata.mood, Mood::Energetic | Mood::Bold));
    assert_eq!(palette.metadata.harmony, HarmonyType::Complementary);
    assert_eq!(palette.metadata.mode, PaletteMode::Dark);
    assert!(hsl(&palette.colors.background.base).l <= 10.5);
    assert!(hsl(&palette.colors.text.base).l >= 89.5);
    assert!(report.harmony.background.l <= 10.0);
    assert!(report.harmony.text.l >= 90.0);
    assert!(palette.metadata.accessibility.wcag_aa);
    assert!(palette.metadata.tags.iter().any(|t| t == "dark"));
}

#[test]
fn lavender_is_analogous_and_soft() {
    let request = GenerationRequest::new("lavender dreams soft purple elegant peaceful").with_seed(7);
    let report = generator().generate_with_diagnostics(&request);

    assert_eq!(report.palette.metadata.harmony, HarmonyType::Analogous);
    let mean = (report.harmony.primary.s + report.harmony.secondary.s) / 2.0;
    assert!(mean <= 55.0, "mean saturation {mean}");
    assert_eq!(report.palette.metadata.mode, PaletteMode::Light);
}

#[test]
fn explicit_seed_is_byte_identical() {
    let request = GenerationRequest::new("sunset over the ocean").with_seed(13);
    let first = serde_json::to_string(&generator().generate(&request)).expect("serialize");
    let second = serde_json::to_string(&generator().generate(&request)).expect("serialize");
    assert_eq!(first, second);
}

#[test]
fn request_timestamp_makes_the_system_clock_byte_identical() {
    let created_at = clock(0).0;
    let request = GenerationRequest::new("sunset over the ocean")
        .with_seed(13)
        .with_created_at(created_at);
    let first = PaletteGenerator::builtin().generate(&request);
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = PaletteGenerator::builtin().generate(&request);
    assert_eq!(first.metadata.created_at, created_at);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn red_and_teal_blend_instead_of_falling_back() {
    let report =
        generator().generate_with_diagnostics(&GenerationRequest::new("red teal").with_seed(0));
    let context = &report.palette.metadata.contextual_analysis;
    assert_eq!(report.analysis.colors.len(), 2);
    assert_eq!(context.base_source, BaseColorSource::ContextBlend);
}

#[test]
fn coherence_bias_uses_every_semantic_group() {
    let report = generator()
        .generate_with_diagnostics(&GenerationRequest::new("ocean breeze").with_seed(1));
    let mut analysis = report.analysis.clone();
    analysis.biases.saturation = 0.0;
    analysis.biases.lightness = -0.5;
    let mut weights = report.palette.metadata.contextual_analysis.weights.clone();
    weights.primary_color = None;

    let mut palette = report.palette.clone();
    palette.colors.background.base = HslColor::new(200.0, 20.0, 8.0).to_hex();
    palette.colors.primary.base = HslColor::new(200.0, 60.0, 65.0).to_hex();
    palette.colors.accent.base = HslColor::new(20.0, 60.0, 65.0).to_hex();
    palette.colors.text.base = HslColor::new(200.0, 10.0, 95.0).to_hex();
    let coherence = validate_coherence(&analysis, &weights, &palette);
    assert!(coherence.is_coherent(), "{:?}", coherence.issues);

    palette.colors.background.base = HslColor::new(200.0, 20.0, 90.0).to_hex();
    palette.colors.text.base = HslColor::new(200.0, 10.0, 80.0).to_hex();
    let coherence = validate_coherence(&analysis, &weights, &palette);
    assert_eq!(coherence.issues.len(), 1);
    assert!((coherence.score - 0.85).abs() < 1e-9);
}

#[test]
fn clock_seeded_palettes_may_differ_across_seconds() {
    let request = GenerationRequest::new("sunset over the ocean");
    for offset in [0, 1, 2, 3] {
        let palette = PaletteGenerator::builtin()
            .with_clock(clock(offset))
            .generate(&request);
        let expected = derive_seed(
            &request.prompt,
            SeedSource::Clock {
                force_variation: false,
            },
            &clock(offset),
        );
        // Output is allowed to change with the clock; only the seed
        // derivation is pinned.
        assert_eq!(palette.metadata.contextual_analysis.seed, expected);
        assert!(palette.id.starts_with("palette-"));
    }
}

#[test]
fn serialized_shape_matches_the_contract() {
    let palette = generator().generate(&GenerationRequest::new("desert sand dunes").with_seed(1));
    assert_eq!(palette.name, "Desert Sand");
    let value = serde_json::to_value(&palette).expect("serialize");
    let keys: Vec<&String> = value.as_object().expect("object").keys().collect();
    insta::assert_json_snapshot!(keys, @r#"
    [
      "colors",
      "description",
      "id",
      "metadata",
      "name",
      "prompt"
    ]
    "#);
    let groups: Vec<&String> = value["colors"].as_object().expect("object").keys().collect();
    insta::assert_json_snapshot!(groups, @r#"
    [
      "accent",
      "background",
      "primary",
      "text"
    ]
    "#);
    let variations: Vec<&String> = value["colors"]["primary"]["variations"]
        .as_object()
        .expect("object")
        .keys()
        .collect();
    insta::assert_json_snapshot!(variations, @r#"
    [
      "200",
      "300"
    ]
    "#);
    assert!(value["metadata"]["createdAt"].is_string());
}

#[test]
fn variations_are_lighter_than_the_base() {
    let palette = generator().generate(&GenerationRequest::new("forest moss").with_seed(3));
    for group in palette.colors.iter() {
        let base = hsl(&group.base).l;
        assert!(hsl(&group.variations.light).l >= base - 0.5);
        assert!(hsl(&group.variations.lighter).l >= hsl(&group.variations.light).l - 0.5);
    }
}

#[test]
fn prompts_without_content_use_the_mood_default() {
    let report =
        generator().generate_with_diagnostics(&GenerationRequest::new("a y el").with_seed(5));
    assert!(report.analysis.keywords.is_empty());
    assert!(report.analysis.colors.is_empty());
    assert_eq!(
        report.palette.metadata.contextual_analysis.base_source,
        BaseColorSource::MoodDefault
    );
    assert_eq!(report.palette.name, "Balanced Palette");
}

#[test]
fn overlay_colors_drive_the_base() {
    let overlay = KnowledgeBase::from_toml_str(
        r#"
        [colors]
        glorp = { hue = 120, saturation = 60, lightness = 45 }
        "#,
    )
    .expect("overlay parses");
    let kb = KnowledgeBase::builtin().overlay(&overlay);
    let report = PaletteGenerator::new(&kb)
        .with_clock(clock(0))
        .generate_with_diagnostics(&GenerationRequest::new("glorp").with_seed(0));
    let matched = &report.palette.metadata.color_matches;
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].term, "glorp");
}

#[test]
fn disabling_tuning_and_fixing_still_meets_contrast() {
    let options = GenerationOptions::default()
        .with_emotional_tuning(false)
        .with_auto_fix(false);
    let report = generator()
        .with_options(options)
        .generate_with_diagnostics(&GenerationRequest::new("pastel pink bakery").with_seed(9));
    assert!(!report.palette.metadata.accessibility.auto_fixed);
    let ratio = report.harmony.text.contrast_ratio(&report.harmony.background);
    assert!(ratio >= WCAG_AA_NORMAL);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn text_contrast_holds_for_any_seed(seed in 0u64..1_000, prompt_index in 0usize..4) {
        let prompts = [
            "cyberpunk neon electric city nights",
            "lavender dreams soft purple elegant peaceful",
            "atardecer en la playa",
            "corporate finance dashboard",
        ];
        let report = generator()
            .generate_with_diagnostics(&GenerationRequest::new(prompts[prompt_index]).with_seed(seed));
        let text = report.harmony.text;
        let ratio = text.contrast_ratio(&report.harmony.background);
        prop_assert!(ratio >= WCAG_AA_NORMAL || text.l == 0.0 || text.l == 100.0);
        prop_assert!((0.0..=1.0).contains(&report.coherence.score));
        prop_assert!(report.palette.metadata.contextual_analysis.seed < 100);
    }
}

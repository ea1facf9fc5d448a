//! Tests for chroma-model types.

use chroma_model::{
    ColorEntry, ColorHarmony, GenerationOptions, GenerationRequest, HarmonyRole, HarmonyType,
    HslColor, MatchType, Mood, Variations, WeightedColor, hue_difference,
};
use proptest::prelude::*;

#[test]
fn harmony_type_parses_and_serializes_kebab_case() {
    let parsed: HarmonyType = "split_complementary".parse().expect("parse harmony");
    assert_eq!(parsed, HarmonyType::SplitComplementary);
    insta::assert_json_snapshot!(parsed, @r#""split-complementary""#);
    assert!("pentadic".parse::<HarmonyType>().is_err());
}

#[test]
fn mood_parses_case_insensitively() {
    assert_eq!("Energetic".parse::<Mood>().unwrap(), Mood::Energetic);
    assert_eq!(Mood::Calm.default_harmony(), HarmonyType::Analogous);
    assert_eq!(Mood::Energetic.default_harmony(), HarmonyType::Complementary);
}

#[test]
fn variations_use_numeric_keys() {
    let variations = Variations {
        light: "#aaaaaa".to_string(),
        lighter: "#bbbbbb".to_string(),
    };
    insta::assert_json_snapshot!(variations, @r###"
    {
      "200": "#aaaaaa",
      "300": "#bbbbbb"
    }
    "###);
}

#[test]
fn weighted_color_flattens_entry() {
    let color = WeightedColor::new(ColorEntry::new(200, 80, 45), 1.4, MatchType::Exact, "ocean");
    assert_eq!(color.weight, 1.0);
    let json = serde_json::to_value(&color).expect("serialize weighted color");
    assert_eq!(json["hue"], 200);
    assert_eq!(json["matchType"], "exact");
    assert_eq!(json["originalTerm"], "ocean");
}

#[test]
fn harmony_roles_follow_construction_order() {
    let colors = [
        HslColor::new(10.0, 50.0, 50.0),
        HslColor::new(20.0, 50.0, 50.0),
        HslColor::new(30.0, 50.0, 50.0),
        HslColor::new(40.0, 10.0, 96.0),
        HslColor::new(50.0, 10.0, 10.0),
    ];
    let harmony = ColorHarmony::from_array(colors);
    assert_eq!(harmony.to_array(), colors);
    assert_eq!(harmony.get(HarmonyRole::Accent).h, 30.0);

    let darker = harmony.map(|_, color| color.with_lightness(color.l - 5.0));
    assert_eq!(darker.text.l, 5.0);
    assert_eq!(harmony.text.l, 10.0);
}

#[test]
fn request_round_trips_through_json() {
    let request = GenerationRequest::new("ocean breeze").with_seed(42);
    let json = serde_json::to_string(&request).expect("serialize request");
    let round: GenerationRequest = serde_json::from_str(&json).expect("deserialize request");
    assert_eq!(round, request);
    assert!(!round.force_variation);
    assert!(!json.contains("createdAt"));
}

#[test]
fn request_accepts_a_creation_timestamp() {
    let request: GenerationRequest = serde_json::from_str(
        r#"{"prompt":"ocean breeze","seed":1,"createdAt":"2025-10-09T12:00:00Z"}"#,
    )
    .expect("deserialize request");
    assert_eq!(
        request.created_at.map(|time| time.timestamp()),
        Some(1_760_011_200)
    );
}

#[test]
fn fuzzy_threshold_is_clamped_to_accepted_range() {
    let options = GenerationOptions::new().with_fuzzy_threshold(0.5);
    assert_eq!(options.fuzzy_threshold, 0.75);
    let options = GenerationOptions::new().with_fuzzy_threshold(0.95);
    assert_eq!(options.fuzzy_threshold, 0.8);
    assert_eq!(GenerationOptions::lenient().fuzzy_threshold, 0.75);
}

proptest! {
    #[test]
    fn hex_round_trip_recovers_chromatic_hsl(h in 0u16..360, s in 35u8..=100, l in 20u8..=80) {
        let original = HslColor::new(f64::from(h), f64::from(s), f64::from(l));
        let recovered = HslColor::from_hex(&original.to_hex()).unwrap().rounded();
        prop_assert!(hue_difference(original.h, recovered.h) <= 1.0, "{original} -> {recovered}");
        prop_assert!((original.s - recovered.s).abs() <= 1.0, "{original} -> {recovered}");
        prop_assert!((original.l - recovered.l).abs() <= 1.0, "{original} -> {recovered}");
    }

    #[test]
    fn contrast_ratio_stays_in_wcag_bounds(
        h1 in 0.0f64..360.0, s1 in 0.0f64..=100.0, l1 in 0.0f64..=100.0,
        h2 in 0.0f64..360.0, s2 in 0.0f64..=100.0, l2 in 0.0f64..=100.0,
    ) {
        let a = HslColor::new(h1, s1, l1);
        let b = HslColor::new(h2, s2, l2);
        let ratio = a.contrast_ratio(&b);
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio));
        prop_assert!((ratio - b.contrast_ratio(&a)).abs() < 1e-9);
    }
}

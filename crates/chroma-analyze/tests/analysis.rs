//! End-to-end analysis of representative prompts.

use chroma_analyze::{ContextualIntelligence, PromptAnalyzer, analyze_intent, jaro_winkler};
use chroma_lexicon::KnowledgeBase;
use chroma_model::{GenerationOptions, HarmonyType, Language, MatchType, Mood, PrimaryIntent};
use proptest::prelude::*;

fn analyzer() -> PromptAnalyzer<'static> {
    PromptAnalyzer::new(KnowledgeBase::builtin(), GenerationOptions::default())
}

#[test]
fn cyberpunk_prompt_is_energetic_and_nocturnal() {
    let analysis = analyzer().analyze("cyberpunk neon electric city nights");
    assert_eq!(analysis.mood, Mood::Energetic);
    assert_eq!(analysis.harmony_type, HarmonyType::Complementary);
    assert!(!analysis.explicit_harmony);
    assert!(analysis.has_context_tag("night"));
    assert!(analysis.has_context_tag("neon"));
    assert!(analysis.biases.lightness <= -0.3);
    insta::assert_json_snapshot!(analysis.keywords, @r#"
    [
      "cyberpunk",
      "neon",
      "electric",
      "city",
      "nights"
    ]
    "#);
    let nights = analysis
        .colors
        .iter()
        .find(|c| c.original_term == "nights")
        .expect("nights matches night");
    assert_eq!(nights.match_type, MatchType::Fuzzy);
}

#[test]
fn lavender_prompt_is_calm_and_soft() {
    let analysis = analyzer().analyze("lavender dreams soft purple elegant peaceful");
    assert_eq!(analysis.mood, Mood::Calm);
    assert_eq!(analysis.harmony_type, HarmonyType::Analogous);
    assert!(analysis.biases.saturation < 0.0);
    assert_eq!(analysis.emotions, ["elegance", "calm"]);
    assert_eq!(analysis.colors[0].original_term, "lavender");
}

#[test]
fn spanish_prompt_matches_through_synonyms() {
    let analysis = analyzer().analyze("atardecer en la playa con colores cálidos");
    assert_eq!(analysis.language, Language::Spanish);
    let terms: Vec<&str> = analysis
        .colors
        .iter()
        .map(|c| c.original_term.as_str())
        .collect();
    assert!(terms.contains(&"atardecer"));
    assert!(terms.contains(&"playa"));
    assert!(analysis.biases.temperature > 0.0);
}

#[test]
fn explicit_harmony_overrides_mood() {
    let analysis = analyzer().analyze("calm ocean triadic");
    assert_eq!(analysis.mood, Mood::Calm);
    assert_eq!(analysis.harmony_type, HarmonyType::Triadic);
    assert!(analysis.explicit_harmony);
}

#[test]
fn compound_phrases_are_reported() {
    let analysis = analyzer().analyze("cherry blossom wedding invitation");
    assert_eq!(analysis.compound_concepts, ["cherry blossom"]);
    assert_eq!(analysis.colors[0].match_type, MatchType::Compound);
    assert_eq!(analysis.use_case.as_deref(), Some("wedding"));
    let intent = analyze_intent(&analysis);
    assert_eq!(intent.primary_intent, PrimaryIntent::Branding);
}

#[test]
fn no_colors_means_no_primary() {
    let kb = KnowledgeBase::builtin();
    let analysis = analyzer().analyze("xyzzy qwv");
    assert!(analysis.colors.is_empty());
    let weights = ContextualIntelligence::new(kb).weigh(&analysis);
    assert!(weights.primary_color.is_none());
    assert_eq!(weights.dominant_theme, "balanced");
}

#[test]
fn analysis_is_deterministic() {
    let prompt = "golden hour over a quiet mountain lake";
    assert_eq!(analyzer().analyze(prompt), analyzer().analyze(prompt));
}

proptest! {
    #[test]
    fn jaro_winkler_identity(word in "[a-zñáéíóú]{1,16}") {
        prop_assert_eq!(jaro_winkler(&word, &word), 1.0);
    }

    #[test]
    fn jaro_winkler_is_bounded(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let score = jaro_winkler(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn retained_colors_are_unique(prompt in "[a-z ]{0,60}") {
        let analysis = analyzer().analyze(&prompt);
        let mut keys: Vec<_> = analysis.colors.iter().map(|c| c.color).collect();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), analysis.colors.len());
        prop_assert!((0.0..=1.0).contains(&analysis.confidence));
    }
}

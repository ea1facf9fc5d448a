//! Intent inference: what the palette is for and what that implies.
//!
//! Suggested harmony by intent:
//!
//! | intent       | energetic / bold | calm / elegant  | other               |
//! |--------------|------------------|-----------------|---------------------|
//! | web          | complementary    | analogous       | analogous           |
//! | app          | complementary    | analogous       | split-complementary |
//! | branding     | complementary    | monochromatic   | split-complementary |
//! | presentation | complementary    | complementary   | complementary       |
//! | creative     | triadic          | analogous       | triadic             |
//! | general      | mood default     | mood default    | mood default        |

use chroma_model::{
    HarmonyType, IntentAnalysis, LightnessPreference, Mood, PrimaryIntent, PromptAnalysis,
    SaturationPreference,
};

const CREATIVE_INDUSTRIES: [&str; 5] = ["fashion", "art", "entertainment", "music", "beauty"];
const BRAND_INDUSTRIES: [&str; 4] = ["luxury", "finance", "legal", "real-estate"];
const CORPORATE_INDUSTRIES: [&str; 5] = ["finance", "legal", "insurance", "consulting", "banking"];
/// Bias magnitude that overrides mood-based preferences.
const BIAS_OVERRIDE: f64 = 0.3;

pub fn intent_for_use_case(use_case: &str) -> PrimaryIntent {
    match use_case {
        "website" | "blog" | "e-commerce" | "portfolio-site" => PrimaryIntent::Web,
        "mobile-app" | "dashboard" | "game" => PrimaryIntent::App,
        "presentation" => PrimaryIntent::Presentation,
        "social-media" | "poster" | "illustration" => PrimaryIntent::Creative,
        _ => PrimaryIntent::Branding,
    }
}

pub fn analyze_intent(analysis: &PromptAnalysis) -> IntentAnalysis {
    let industries: Vec<&str> = analysis.industries.iter().map(String::as_str).collect();
    let creative_industry = industries.iter().any(|i| CREATIVE_INDUSTRIES.contains(i));
    let brand_industry = industries.iter().any(|i| BRAND_INDUSTRIES.contains(i));

    let (primary_intent, confidence) = match analysis.use_case.as_deref() {
        Some(use_case) => {
            let mut intent = intent_for_use_case(use_case);
            if matches!(intent, PrimaryIntent::Web | PrimaryIntent::App) {
                if creative_industry {
                    intent = PrimaryIntent::Creative;
                } else if brand_industry {
                    intent = PrimaryIntent::Branding;
                }
            }
            let bonus = if industries.is_empty() { 0.0 } else { 0.1 };
            (intent, 0.8 + bonus)
        }
        None if creative_industry => (PrimaryIntent::Creative, 0.6),
        None if !industries.is_empty() => (PrimaryIntent::Branding, 0.6),
        None => (PrimaryIntent::General, 0.3),
    };

    let requires_high_contrast = matches!(primary_intent, PrimaryIntent::Web | PrimaryIntent::App)
        || matches!(analysis.mood, Mood::Bold | Mood::Energetic)
        || industries.iter().any(|i| CORPORATE_INDUSTRIES.contains(i));

    IntentAnalysis {
        primary_intent,
        confidence,
        suggested_harmony: suggested_harmony(primary_intent, analysis.mood),
        requires_high_contrast,
        saturation_preference: saturation_preference(analysis),
        lightness_preference: lightness_preference(analysis),
    }
}

fn suggested_harmony(intent: PrimaryIntent, mood: Mood) -> HarmonyType {
    let vivid = matches!(mood, Mood::Energetic | Mood::Bold);
    let quiet = matches!(mood, Mood::Calm | Mood::Elegant);
    match intent {
        PrimaryIntent::Web if vivid => HarmonyType::Complementary,
        PrimaryIntent::Web => HarmonyType::Analogous,
        PrimaryIntent::App if vivid => HarmonyType::Complementary,
        PrimaryIntent::App if quiet => HarmonyType::Analogous,
        PrimaryIntent::App => HarmonyType::SplitComplementary,
        PrimaryIntent::Branding if vivid => HarmonyType::Complementary,
        PrimaryIntent::Branding if quiet => HarmonyType::Monochromatic,
        PrimaryIntent::Branding => HarmonyType::SplitComplementary,
        PrimaryIntent::Presentation => HarmonyType::Complementary,
        PrimaryIntent::Creative if quiet => HarmonyType::Analogous,
        PrimaryIntent::Creative => HarmonyType::Triadic,
        PrimaryIntent::General => mood.default_harmony(),
    }
}

fn saturation_preference(analysis: &PromptAnalysis) -> SaturationPreference {
    let bias = analysis.biases.saturation;
    if bias > BIAS_OVERRIDE {
        return SaturationPreference::High;
    }
    if bias < -BIAS_OVERRIDE {
        return SaturationPreference::Low;
    }
    match analysis.mood {
        Mood::Energetic | Mood::Bold | Mood::Playful => SaturationPreference::High,
        Mood::Calm | Mood::Elegant | Mood::Professional => SaturationPreference::Low,
        _ => SaturationPreference::Medium,
    }
}

fn lightness_preference(analysis: &PromptAnalysis) -> LightnessPreference {
    let bias = analysis.biases.lightness;
    if bias > BIAS_OVERRIDE {
        return LightnessPreference::Light;
    }
    if bias < -BIAS_OVERRIDE {
        return LightnessPreference::Dark;
    }
    if analysis.has_context_tag("night") || analysis.has_context_tag("dark") {
        return LightnessPreference::Dark;
    }
    match analysis.mood {
        Mood::Mysterious => LightnessPreference::Dark,
        Mood::Calm | Mood::Playful | Mood::Romantic => LightnessPreference::Light,
        _ => LightnessPreference::Medium,
    }
}

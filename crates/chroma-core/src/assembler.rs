//! Builds the semantic palette from a finished harmony.

use chrono::{DateTime, Utc};
use chroma_harmony::BaseSelection;
use chroma_model::{
    AccessibilityInfo, ColorGroup, ColorHarmony, ColorProvenance, ContextualTrace,
    ContextualWeights, EmotionalProfile, EmotionalSummary, HarmonyType, HslColor, IntentAnalysis,
    PaletteColors, PaletteMetadata, PaletteMode, PromptAnalysis, SemanticPalette, StyleTag,
    Variations,
};
use chroma_validate::{ContrastReport, PaletteValidation};
use sha2::{Digest, Sha256};

const LIGHT_VARIATION: f64 = 15.0;
const LIGHTER_VARIATION: f64 = 25.0;
const ID_BYTES: usize = 6;

/// Everything the assembler reads; produced by the earlier stages.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInput<'a> {
    pub prompt: &'a str,
    pub seed: u64,
    pub created_at: DateTime<Utc>,
    pub analysis: &'a PromptAnalysis,
    pub weights: &'a ContextualWeights,
    pub intent: &'a IntentAnalysis,
    pub profile: &'a EmotionalProfile,
    pub harmony_type: HarmonyType,
    pub harmony: &'a ColorHarmony,
    pub mode: PaletteMode,
    pub base: &'a BaseSelection,
    pub validation: &'a PaletteValidation,
    pub auto_fixed: bool,
}

pub fn assemble(input: &AssemblyInput<'_>) -> SemanticPalette {
    let analysis = input.analysis;
    let harmony = input.harmony;
    let contrast = ContrastReport::measure(harmony);
    let style = style_tag(harmony, input.mode);
    let theme = input.weights.dominant_theme.as_str();

    let colors = PaletteColors {
        background: group(
            "Background",
            harmony.background,
            match input.mode {
                PaletteMode::Light => "Light background surface".to_string(),
                PaletteMode::Dark => "Dark background surface".to_string(),
            },
        ),
        primary: group(
            "Primary",
            harmony.primary,
            format!("Primary color inspired by {theme}"),
        ),
        accent: group(
            "Accent",
            harmony.accent,
            format!("{} accent for emphasis", title_case(input.harmony_type.as_str())),
        ),
        text: group(
            "Text",
            harmony.text,
            format!("Body text at {:.1}:1 contrast on the background", contrast.text),
        ),
    };

    let accessibility = AccessibilityInfo {
        text_contrast: contrast.text,
        primary_contrast: contrast.primary,
        accent_contrast: contrast.accent,
        wcag_aa: contrast.wcag_aa(),
        wcag_aaa: contrast.wcag_aaa(),
        large_text_aa: contrast.large_text_aa(),
        validation_score: input.validation.score,
        valid: input.validation.valid,
        auto_fixed: input.auto_fixed,
        issues: input.validation.issues.clone(),
        warnings: input.validation.warnings.clone(),
    };

    let profile = input.profile;
    let emotional_profile = EmotionalSummary {
        energy: profile.energy,
        warmth: profile.warmth,
        sophistication: profile.sophistication,
        playfulness: profile.playfulness,
        intensity: profile.intensity,
        dominant_trait: profile.dominant_trait().to_string(),
    };

    let color_matches = analysis
        .colors
        .iter()
        .map(|color| ColorProvenance {
            term: color.original_term.clone(),
            match_type: color.match_type,
            weight: color.weight,
            hex: color.color.to_hsl().to_hex(),
        })
        .collect();

    let metadata = PaletteMetadata {
        created_at: input.created_at,
        harmony: input.harmony_type,
        mood: analysis.mood,
        accessibility,
        style,
        tags: tags(input, style),
        mode: input.mode,
        emotional_profile,
        language: analysis.language,
        confidence: analysis.confidence,
        compound_concepts: analysis.compound_concepts.clone(),
        brand_personality: analysis.brand_personality.clone(),
        use_case: analysis.use_case.clone(),
        color_matches,
        contextual_analysis: ContextualTrace {
            weights: input.weights.clone(),
            intent: *input.intent,
            base_color: input.base.color,
            base_source: input.base.source,
            seed: input.seed,
        },
    };

    SemanticPalette {
        id: palette_id(input.prompt, input.seed),
        name: palette_name(analysis),
        prompt: input.prompt.to_string(),
        description: format!(
            "A {} {} palette with {} harmony, inspired by {theme}.",
            style.as_str(),
            analysis.mood,
            input.harmony_type
        ),
        colors,
        metadata,
    }
}

fn group(name: &str, color: HslColor, description: String) -> ColorGroup {
    ColorGroup {
        name: name.to_string(),
        base: color.to_hex(),
        variations: Variations {
            light: color.lighten(LIGHT_VARIATION).to_hex(),
            lighter: color.lighten(LIGHTER_VARIATION).to_hex(),
        },
        description,
    }
}

/// `palette-` plus the first 12 hex digits of SHA-256(prompt ‖ seed).
pub fn palette_id(prompt: &str, seed: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    hasher.update(seed.to_be_bytes());
    let digest = hasher.finalize();
    format!("palette-{}", hex::encode(&digest[..ID_BYTES]))
}

/// Compound concept, else the first two keywords, else `<Mood> Palette`.
pub fn palette_name(analysis: &PromptAnalysis) -> String {
    if let Some(concept) = analysis.compound_concepts.first() {
        return title_case(concept);
    }
    if !analysis.keywords.is_empty() {
        let words: Vec<&str> = analysis
            .keywords
            .iter()
            .take(2)
            .map(String::as_str)
            .collect();
        return title_case(&words.join(" "));
    }
    format!("{} Palette", title_case(analysis.mood.as_str()))
}

pub fn style_tag(harmony: &ColorHarmony, mode: PaletteMode) -> StyleTag {
    if mode == PaletteMode::Dark {
        return StyleTag::Dark;
    }
    let saturation = (harmony.primary.s + harmony.accent.s) / 2.0;
    let lightness = (harmony.primary.l + harmony.accent.l) / 2.0;
    if lightness >= 70.0 && saturation <= 60.0 {
        StyleTag::Pastel
    } else if saturation >= 70.0 {
        StyleTag::Vibrant
    } else if saturation <= 35.0 {
        StyleTag::Muted
    } else {
        StyleTag::Balanced
    }
}

fn tags(input: &AssemblyInput<'_>, style: StyleTag) -> Vec<String> {
    let analysis = input.analysis;
    let mode = match input.mode {
        PaletteMode::Light => "light",
        PaletteMode::Dark => "dark",
    };
    let candidates = [
        analysis.mood.as_str(),
        input.harmony_type.as_str(),
        style.as_str(),
        mode,
    ]
    .into_iter()
    .chain(analysis.context_tags.iter().map(String::as_str))
    .chain(analysis.use_case.as_deref())
    .chain(analysis.emotions.iter().map(String::as_str));

    let mut tags: Vec<String> = Vec::new();
    for tag in candidates {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_stable_and_seed_sensitive() {
        let id = palette_id("ocean", 7);
        assert_eq!(id.len(), "palette-".len() + 12);
        assert_eq!(id, palette_id("ocean", 7));
        assert_ne!(id, palette_id("ocean", 8));
    }

    #[test]
    fn title_case_handles_accents() {
        assert_eq!(title_case("atardecer dorado"), "Atardecer Dorado");
        assert_eq!(title_case("élan"), "Élan");
        assert_eq!(title_case("split-complementary"), "Split-complementary");
    }

    #[test]
    fn dark_mode_wins_the_style_tag() {
        let color = HslColor::new(200.0, 90.0, 50.0);
        let harmony = ColorHarmony::from_array([color; 5]);
        assert_eq!(style_tag(&harmony, PaletteMode::Dark), StyleTag::Dark);
        assert_eq!(style_tag(&harmony, PaletteMode::Light), StyleTag::Vibrant);
    }

    #[test]
    fn pale_soft_roles_are_pastel() {
        let color = HslColor::new(270.0, 40.0, 80.0);
        let harmony = ColorHarmony::from_array([color; 5]);
        assert_eq!(style_tag(&harmony, PaletteMode::Light), StyleTag::Pastel);
    }
}

//! The assembled palette returned to callers.
//!
//! Serialized shape:
//!
//! ```text
//! {id, name, prompt, description,
//!  colors: {background, primary, accent, text},
//!  metadata}
//! ```
//!
//! where each color group is `{name, base, variations: {"200", "300"}, description}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{HarmonyType, Language, MatchType, Mood};
use crate::color::HslColor;
use crate::context::{ContextualWeights, IntentAnalysis};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticPalette {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub description: String,
    pub colors: PaletteColors,
    pub metadata: PaletteMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColors {
    pub background: ColorGroup,
    pub primary: ColorGroup,
    pub accent: ColorGroup,
    pub text: ColorGroup,
}

impl PaletteColors {
    /// Groups in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorGroup> {
        [&self.background, &self.primary, &self.accent, &self.text].into_iter()
    }
}

/// One semantic swatch with two lighter variations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorGroup {
    pub name: String,
    /// `#rrggbb`
    pub base: String,
    pub variations: Variations,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variations {
    /// Base lightness +15.
    #[serde(rename = "200")]
    pub light: String,
    /// Base lightness +25.
    #[serde(rename = "300")]
    pub lighter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Vibrant,
    Muted,
    Pastel,
    Dark,
    Balanced,
}

impl StyleTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Vibrant => "vibrant",
            StyleTag::Muted => "muted",
            StyleTag::Pastel => "pastel",
            StyleTag::Dark => "dark",
            StyleTag::Balanced => "balanced",
        }
    }
}

/// Where the base hue/saturation/lightness came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseColorSource {
    ContextPrimary,
    ContextBlend,
    ExtractedBlend,
    Industry,
    Emotion,
    MoodDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityInfo {
    pub text_contrast: f64,
    pub primary_contrast: f64,
    pub accent_contrast: f64,
    pub wcag_aa: bool,
    pub wcag_aaa: bool,
    pub large_text_aa: bool,
    pub validation_score: f64,
    pub valid: bool,
    pub auto_fixed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalSummary {
    pub energy: f64,
    pub warmth: f64,
    pub sophistication: f64,
    pub playfulness: f64,
    pub intensity: f64,
    pub dominant_trait: String,
}

/// Provenance of one extracted color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorProvenance {
    pub term: String,
    pub match_type: MatchType,
    pub weight: f64,
    pub hex: String,
}

/// Full trace of the contextual stage, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextualTrace {
    pub weights: ContextualWeights,
    pub intent: IntentAnalysis,
    pub base_color: HslColor,
    pub base_source: BaseColorSource,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteMetadata {
    pub created_at: DateTime<Utc>,
    pub harmony: HarmonyType,
    pub mood: Mood,
    pub accessibility: AccessibilityInfo,
    pub style: StyleTag,
    pub tags: Vec<String>,
    pub mode: PaletteMode,
    pub emotional_profile: EmotionalSummary,
    pub language: Language,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compound_concepts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brand_personality: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
    pub color_matches: Vec<ColorProvenance>,
    pub contextual_analysis: ContextualTrace,
}

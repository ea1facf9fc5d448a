//! Results of prompt analysis (lexical analysis through entity extraction).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::ColorEntry;
use crate::error::ChromaError;

/// Dominant language of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "mixed")]
    Mixed,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy that produced a [`WeightedColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Synonym,
    Fuzzy,
    Stemmed,
    Compound,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Synonym => "synonym",
            MatchType::Fuzzy => "fuzzy",
            MatchType::Stemmed => "stemmed",
            MatchType::Compound => "compound",
        }
    }
}

/// A knowledge-base color matched from the prompt, with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedColor {
    #[serde(flatten)]
    pub color: ColorEntry,
    /// Match confidence in `[0, 1]`.
    pub weight: f64,
    pub match_type: MatchType,
    /// Surface term (token or phrase) that produced the match.
    pub original_term: String,
}

impl WeightedColor {
    pub fn new(
        color: ColorEntry,
        weight: f64,
        match_type: MatchType,
        original_term: impl Into<String>,
    ) -> Self {
        Self {
            color,
            weight: weight.clamp(0.0, 1.0),
            match_type,
            original_term: original_term.into(),
        }
    }
}

/// Overall emotional register of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Energetic,
    Calm,
    Bold,
    Elegant,
    Playful,
    Natural,
    Mysterious,
    Romantic,
    Professional,
    Warm,
    Cool,
    #[default]
    Balanced,
}

impl Mood {
    pub const ALL: [Mood; 12] = [
        Mood::Energetic,
        Mood::Calm,
        Mood::Bold,
        Mood::Elegant,
        Mood::Playful,
        Mood::Natural,
        Mood::Mysterious,
        Mood::Romantic,
        Mood::Professional,
        Mood::Warm,
        Mood::Cool,
        Mood::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Calm => "calm",
            Mood::Bold => "bold",
            Mood::Elegant => "elegant",
            Mood::Playful => "playful",
            Mood::Natural => "natural",
            Mood::Mysterious => "mysterious",
            Mood::Romantic => "romantic",
            Mood::Professional => "professional",
            Mood::Warm => "warm",
            Mood::Cool => "cool",
            Mood::Balanced => "balanced",
        }
    }

    /// Harmony used when the prompt does not ask for one explicitly.
    pub fn default_harmony(&self) -> HarmonyType {
        match self {
            Mood::Energetic => HarmonyType::Complementary,
            Mood::Bold => HarmonyType::Triadic,
            Mood::Calm | Mood::Natural | Mood::Romantic | Mood::Warm | Mood::Cool => {
                HarmonyType::Analogous
            }
            Mood::Elegant => HarmonyType::Monochromatic,
            Mood::Playful => HarmonyType::Tetradic,
            Mood::Mysterious | Mood::Professional | Mood::Balanced => {
                HarmonyType::SplitComplementary
            }
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == needle)
            .ok_or_else(|| ChromaError::UnknownMood(s.to_string()))
    }
}

/// Color-wheel relationship between the generated roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyType {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
    Monochromatic,
}

impl HarmonyType {
    pub const ALL: [HarmonyType; 6] = [
        HarmonyType::Complementary,
        HarmonyType::Analogous,
        HarmonyType::Triadic,
        HarmonyType::Tetradic,
        HarmonyType::SplitComplementary,
        HarmonyType::Monochromatic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonyType::Complementary => "complementary",
            HarmonyType::Analogous => "analogous",
            HarmonyType::Triadic => "triadic",
            HarmonyType::Tetradic => "tetradic",
            HarmonyType::SplitComplementary => "split-complementary",
            HarmonyType::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyType {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('_', "-");
        HarmonyType::ALL
            .into_iter()
            .find(|harmony| harmony.as_str() == needle)
            .ok_or_else(|| ChromaError::UnknownHarmony(s.to_string()))
    }
}

/// Modifier biases extracted from the prompt, each in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Biases {
    pub intensity: f64,
    pub temperature: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Immutable outcome of analyzing one prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptAnalysis {
    /// Lowercased, punctuation-stripped prompt text.
    pub normalized: String,
    pub language: Language,
    pub language_confidence: f64,
    /// Overall analysis confidence in `[0, 1]`.
    pub confidence: f64,
    pub keywords: Vec<String>,
    pub emotions: Vec<String>,
    pub industries: Vec<String>,
    pub objects: Vec<String>,
    pub colors: Vec<WeightedColor>,
    pub biases: Biases,
    pub harmony_type: HarmonyType,
    /// True when the prompt named a harmony instead of inheriting the mood's.
    pub explicit_harmony: bool,
    pub mood: Mood,
    pub context_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brand_personality: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compound_concepts: Vec<String>,
}

impl PromptAnalysis {
    pub fn has_context_tag(&self, tag: &str) -> bool {
        self.context_tags.iter().any(|t| t == tag)
    }

    pub fn dominant_emotion(&self) -> Option<&str> {
        self.emotions.first().map(String::as_str)
    }
}

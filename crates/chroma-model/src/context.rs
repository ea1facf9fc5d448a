//! Contextual re-weighting and intent inference results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::{HarmonyType, WeightedColor};

/// Evidence-backed coherence factors. A factor is `None` when the prompt
/// carries no evidence for it, which is distinct from a zero score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoherenceFactors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotional: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environmental: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purposeful: Option<f64>,
}

impl CoherenceFactors {
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        [
            self.temporal,
            self.emotional,
            self.environmental,
            self.purposeful,
        ]
        .into_iter()
        .flatten()
    }

    pub fn any_above(&self, threshold: f64) -> bool {
        self.values().any(|value| value > threshold)
    }
}

/// Colors re-ranked by contextual evidence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextualWeights {
    pub primary_color: Option<WeightedColor>,
    pub secondary_colors: Vec<WeightedColor>,
    pub dominant_theme: String,
    /// Strength of the user's expressed intention in `[0, 1]`.
    pub intention_score: f64,
    pub coherence_factors: CoherenceFactors,
    /// Every extracted color after adjustment, highest weight first.
    pub adjusted_colors: Vec<WeightedColor>,
}

impl ContextualWeights {
    /// Primary plus secondary colors, in rank order.
    pub fn top_colors(&self) -> impl Iterator<Item = &WeightedColor> {
        self.primary_color.iter().chain(self.secondary_colors.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryIntent {
    Branding,
    Web,
    App,
    Presentation,
    Creative,
    General,
}

impl PrimaryIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryIntent::Branding => "branding",
            PrimaryIntent::Web => "web",
            PrimaryIntent::App => "app",
            PrimaryIntent::Presentation => "presentation",
            PrimaryIntent::Creative => "creative",
            PrimaryIntent::General => "general",
        }
    }
}

impl fmt::Display for PrimaryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaturationPreference {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightnessPreference {
    Dark,
    Medium,
    Light,
}

/// What the user is most likely designing for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentAnalysis {
    pub primary_intent: PrimaryIntent,
    pub confidence: f64,
    pub suggested_harmony: HarmonyType,
    pub requires_high_contrast: bool,
    pub saturation_preference: SaturationPreference,
    pub lightness_preference: LightnessPreference,
}

//! Post-hoc coherence between what the prompt asked for and what was built.
//!
//! Advisory only. Nothing here changes a palette.

use chroma_model::{
    ContextualWeights, HslColor, PromptAnalysis, SemanticPalette, hue_difference,
};
use serde::{Deserialize, Serialize};

const HUE_TOLERANCE: f64 = 30.0;
const BIAS_THRESHOLD: f64 = 0.3;
const HUE_PENALTY: f64 = 0.25;
const BIAS_PENALTY: f64 = 0.15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoherenceReport {
    pub score: f64,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl CoherenceReport {
    pub fn is_coherent(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Compares the contextual primary with the generated primary, and the
/// prompt's biases with the mean of the four semantic groups.
pub fn validate_coherence(
    analysis: &PromptAnalysis,
    weights: &ContextualWeights,
    palette: &SemanticPalette,
) -> CoherenceReport {
    let primary = HslColor::from_hex_lossy(&palette.colors.primary.base);
    let mut score: f64 = 1.0;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if let Some(expected) = &weights.primary_color {
        let drift = hue_difference(f64::from(expected.color.hue), primary.h);
        if drift > HUE_TOLERANCE {
            score -= HUE_PENALTY;
            issues.push(format!(
                "primary hue is {drift:.0}° away from '{}'",
                expected.original_term
            ));
            suggestions.push(format!(
                "pass an explicit seed or name '{}' more prominently",
                expected.original_term
            ));
        }
    }

    let (mean_saturation, mean_lightness) = palette_means(palette);
    let biases = &analysis.biases;

    if biases.saturation > BIAS_THRESHOLD && mean_saturation < 50.0 {
        score -= BIAS_PENALTY;
        issues.push(format!(
            "prompt asks for vivid color but mean saturation is {mean_saturation:.0}%"
        ));
        suggestions.push("raise saturation across the palette".to_string());
    } else if biases.saturation < -BIAS_THRESHOLD && mean_saturation > 60.0 {
        score -= BIAS_PENALTY;
        issues.push(format!(
            "prompt asks for muted color but mean saturation is {mean_saturation:.0}%"
        ));
        suggestions.push("lower saturation across the palette".to_string());
    }

    if biases.lightness > BIAS_THRESHOLD && mean_lightness < 40.0 {
        score -= BIAS_PENALTY;
        issues.push(format!(
            "prompt asks for light color but mean lightness is {mean_lightness:.0}%"
        ));
        suggestions.push("lighten the palette".to_string());
    } else if biases.lightness < -BIAS_THRESHOLD && mean_lightness > 60.0 {
        score -= BIAS_PENALTY;
        issues.push(format!(
            "prompt asks for dark color but mean lightness is {mean_lightness:.0}%"
        ));
        suggestions.push("darken the palette".to_string());
    }

    CoherenceReport {
        score: score.clamp(0.0, 1.0),
        issues,
        suggestions,
    }
}

/// Mean saturation and lightness over every semantic group.
fn palette_means(palette: &SemanticPalette) -> (f64, f64) {
    let (mut saturation, mut lightness, mut count) = (0.0, 0.0, 0.0);
    for group in palette.colors.iter() {
        let color = HslColor::from_hex_lossy(&group.base);
        saturation += color.s;
        lightness += color.l;
        count += 1.0;
    }
    if count == 0.0 {
        return (0.0, 0.0);
    }
    (saturation / count, lightness / count)
}

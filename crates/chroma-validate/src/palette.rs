//! Whole-palette validation and the single-pass auto-fix.

use std::collections::BTreeSet;

use chroma_model::{ColorHarmony, HarmonyRole, HslColor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compatibility::check_compatibility;

/// Minimum overall score for a valid palette.
pub const VALID_SCORE: f64 = 0.7;
/// A palette with this many issues is invalid regardless of score.
pub const MAX_ISSUES: usize = 3;

const OVERSATURATED_MEAN: f64 = 80.0;
const UNDERSATURATED_MEAN: f64 = 20.0;
const DARK_MEAN: f64 = 20.0;
const LIGHT_MEAN: f64 = 80.0;
const HUE_BUCKET: f64 = 30.0;
const MIN_HUE_BUCKETS: usize = 2;

const ADJACENT_LIGHTNESS_GAP: f64 = 15.0;
const LIGHTNESS_PUSH: f64 = 10.0;
const SATURATION_CUT: f64 = 20.0;
const SATURATION_FLOOR: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteValidation {
    pub score: f64,
    pub valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl PaletteValidation {
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

/// Validates colors labelled by their position (`#1`, `#2`, ...).
pub fn validate_palette(colors: &[HslColor]) -> PaletteValidation {
    let labelled: Vec<(String, HslColor)> = colors
        .iter()
        .enumerate()
        .map(|(index, color)| (format!("#{}", index + 1), *color))
        .collect();
    validate_labelled(&labelled)
}

/// Validates a harmony with role names in the findings.
pub fn validate_harmony(harmony: &ColorHarmony) -> PaletteValidation {
    let labelled: Vec<(String, HslColor)> = HarmonyRole::ALL
        .iter()
        .map(|role| (role.to_string(), harmony.get(*role)))
        .collect();
    validate_labelled(&labelled)
}

fn validate_labelled(colors: &[(String, HslColor)]) -> PaletteValidation {
    let mut scores = Vec::new();
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    for (i, (left_label, left)) in colors.iter().enumerate() {
        for (right_label, right) in &colors[i + 1..] {
            let pair = check_compatibility(left, right);
            if !pair.compatible {
                issues.push(format!(
                    "{left_label} and {right_label} are incompatible (score {:.2})",
                    pair.score
                ));
            }
            for warning in &pair.warnings {
                warnings.push(format!("{left_label}/{right_label}: {warning}"));
            }
            scores.push(pair.score);
        }
    }

    if !colors.is_empty() {
        let count = colors.len() as f64;
        let mean_saturation = colors.iter().map(|(_, c)| c.s).sum::<f64>() / count;
        let mean_lightness = colors.iter().map(|(_, c)| c.l).sum::<f64>() / count;

        let saturation_score = if mean_saturation > OVERSATURATED_MEAN {
            issues.push(format!(
                "palette is overly saturated (mean {mean_saturation:.0}%)"
            ));
            f64::max(0.4, 1.0 - (mean_saturation - OVERSATURATED_MEAN) / 50.0)
        } else if mean_saturation < UNDERSATURATED_MEAN {
            issues.push(format!(
                "palette is under-saturated (mean {mean_saturation:.0}%)"
            ));
            0.5 + mean_saturation / (2.0 * UNDERSATURATED_MEAN)
        } else {
            1.0
        };

        let lightness_score = if mean_lightness < DARK_MEAN || mean_lightness > LIGHT_MEAN {
            issues.push(format!(
                "palette lightness is extreme (mean {mean_lightness:.0}%)"
            ));
            0.6
        } else {
            1.0
        };

        let buckets: BTreeSet<u32> = colors
            .iter()
            .map(|(_, c)| (c.h / HUE_BUCKET).floor() as u32)
            .collect();
        let variety_score = if buckets.len() < MIN_HUE_BUCKETS {
            issues.push("palette has low hue variety".to_string());
            0.7
        } else {
            1.0
        };

        scores.extend([saturation_score, lightness_score, variety_score]);
    }

    let score = if scores.is_empty() {
        1.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };
    let valid = score >= VALID_SCORE && issues.len() < MAX_ISSUES;
    debug!(score, valid, issues = issues.len(), "palette validated");
    PaletteValidation {
        score,
        valid,
        issues,
        warnings,
    }
}

/// One deterministic repair pass over colors in construction order.
///
/// Not a fixed point: the result can still fail [`validate_palette`].
pub fn auto_fix_palette(colors: &[HslColor]) -> Vec<HslColor> {
    let mut fixed = colors.to_vec();

    for i in 1..fixed.len() {
        let (left, right) = (fixed[i - 1], fixed[i]);
        if (left.l - right.l).abs() < ADJACENT_LIGHTNESS_GAP {
            let (darker, lighter) = if left.l <= right.l { (i - 1, i) } else { (i, i - 1) };
            fixed[darker] = fixed[darker].lighten(-LIGHTNESS_PUSH);
            fixed[lighter] = fixed[lighter].lighten(LIGHTNESS_PUSH);
        }
    }

    if !fixed.is_empty() {
        let mean_saturation = fixed.iter().map(|c| c.s).sum::<f64>() / fixed.len() as f64;
        if mean_saturation > OVERSATURATED_MEAN {
            for color in fixed.iter_mut().skip(1) {
                if color.s > SATURATION_FLOOR {
                    *color = color.with_saturation((color.s - SATURATION_CUT).max(SATURATION_FLOOR));
                }
            }
        }
    }

    let len = fixed.len();
    if len > 0 && !fixed.iter().any(|c| c.l > 70.0) {
        fixed[len - 1] = fixed[len - 1].with_lightness(85.0);
    }
    if len > 1 && !fixed.iter().any(|c| c.l < 30.0) {
        fixed[len - 2] = fixed[len - 2].with_lightness(25.0);
    }
    fixed
}

/// [`auto_fix_palette`] over the five roles.
pub fn auto_fix_harmony(harmony: &ColorHarmony) -> ColorHarmony {
    let fixed = auto_fix_palette(&harmony.to_array());
    ColorHarmony::from_array(std::array::from_fn(|i| fixed[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversaturated_palette_is_reported() {
        let colors: Vec<HslColor> = [0.0, 72.0, 144.0, 216.0, 288.0]
            .iter()
            .map(|h| HslColor::new(*h, 95.0, 50.0))
            .collect();
        let result = validate_palette(&colors);
        assert!(result.issues.iter().any(|i| i.contains("overly saturated")));
        assert!(result.score < 1.0);
    }

    #[test]
    fn near_identical_lightness_is_spread() {
        let colors = [
            HslColor::new(0.0, 50.0, 20.0),
            HslColor::new(120.0, 50.0, 25.0),
            HslColor::new(240.0, 50.0, 90.0),
        ];
        let fixed = auto_fix_palette(&colors);
        assert_eq!(fixed[0].l, 10.0);
        assert_eq!(fixed[1].l, 35.0);
        assert_eq!(fixed[2].l, 90.0);
    }

    #[test]
    fn missing_extremes_are_forced() {
        let colors = [
            HslColor::new(0.0, 50.0, 40.0),
            HslColor::new(120.0, 50.0, 60.0),
            HslColor::new(240.0, 50.0, 40.0),
        ];
        let fixed = auto_fix_palette(&colors);
        assert_eq!(fixed[2].l, 85.0);
        assert_eq!(fixed[1].l, 25.0);
    }

    #[test]
    fn saturation_cut_spares_the_first_color() {
        let colors = [
            HslColor::new(0.0, 95.0, 10.0),
            HslColor::new(90.0, 95.0, 40.0),
            HslColor::new(180.0, 95.0, 90.0),
        ];
        let fixed = auto_fix_palette(&colors);
        assert_eq!(fixed[0].s, 95.0);
        assert_eq!(fixed[1].s, 75.0);
        assert_eq!(fixed[2].s, 75.0);
    }
}

//! Pairwise color compatibility scoring.

use chroma_model::HslColor;
use serde::{Deserialize, Serialize};

/// Lowest score at which a pair is still compatible.
pub const COMPATIBLE_SCORE: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compatibility {
    pub score: f64,
    pub compatible: bool,
    pub contrast: f64,
    pub hue_difference: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

struct Penalty {
    applies: fn(&PairMetrics) -> bool,
    amount: f64,
    warning: &'static str,
}

struct PairMetrics {
    hue: f64,
    saturation: f64,
    lightness: f64,
    contrast: f64,
    min_saturation: f64,
}

const PENALTIES: &[Penalty] = &[
    Penalty {
        applies: |m| m.hue < 15.0,
        amount: 0.2,
        warning: "too similar in hue",
    },
    Penalty {
        applies: |m| (150.0..170.0).contains(&m.hue),
        amount: 0.15,
        warning: "near-complementary clash",
    },
    Penalty {
        applies: |m| m.saturation > 70.0,
        amount: 0.1,
        warning: "saturation gap too wide",
    },
    Penalty {
        applies: |m| m.min_saturation > 80.0,
        amount: 0.1,
        warning: "both colors oversaturated",
    },
    Penalty {
        applies: |m| m.lightness < 10.0,
        amount: 0.25,
        warning: "lightness too similar",
    },
    Penalty {
        applies: |m| m.contrast < 3.0,
        amount: 0.3,
        warning: "insufficient contrast",
    },
    Penalty {
        applies: |m| m.hue >= 170.0 && m.min_saturation > 70.0,
        amount: 0.15,
        warning: "complementary vibration",
    },
];

/// Scores a pair from 1.0 down, one fixed penalty per rule that fires.
pub fn check_compatibility(a: &HslColor, b: &HslColor) -> Compatibility {
    let metrics = PairMetrics {
        hue: a.hue_distance(b),
        saturation: (a.s - b.s).abs(),
        lightness: (a.l - b.l).abs(),
        contrast: a.contrast_ratio(b),
        min_saturation: a.s.min(b.s),
    };
    let mut score = 1.0;
    let mut warnings = Vec::new();
    for penalty in PENALTIES {
        if (penalty.applies)(&metrics) {
            score -= penalty.amount;
            warnings.push(penalty.warning.to_string());
        }
    }
    let score = f64::max(score, 0.0);
    Compatibility {
        score,
        compatible: score >= COMPATIBLE_SCORE,
        contrast: metrics.contrast,
        hue_difference: metrics.hue,
        warnings,
    }
}

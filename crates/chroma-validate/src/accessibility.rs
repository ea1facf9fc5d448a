//! WCAG contrast measurement and text repair.

use chroma_model::{
    ColorHarmony, HslColor, WCAG_AA_LARGE, WCAG_AA_NORMAL, WCAG_AAA_NORMAL,
};
use serde::{Deserialize, Serialize};

/// Lightness step used when pushing text away from the background.
const LIGHTNESS_STEP: f64 = 2.0;

/// Moves `text` toward black (on light backgrounds) or white (on dark ones)
/// until it reaches `min_contrast` against `background`, or its lightness
/// hits 0 or 100.
pub fn ensure_accessibility(text: HslColor, background: HslColor, min_contrast: f64) -> HslColor {
    let step = if background.l > 50.0 {
        -LIGHTNESS_STEP
    } else {
        LIGHTNESS_STEP
    };
    let limit = if step < 0.0 { 0.0 } else { 100.0 };
    let mut adjusted = text;
    while adjusted.contrast_ratio(&background) < min_contrast && adjusted.l != limit {
        adjusted = adjusted.lighten(step);
    }
    adjusted
}

/// Contrast of the foreground roles against the background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    pub text: f64,
    pub primary: f64,
    pub accent: f64,
}

impl ContrastReport {
    pub fn measure(harmony: &ColorHarmony) -> Self {
        let background = harmony.background;
        Self {
            text: harmony.text.contrast_ratio(&background),
            primary: harmony.primary.contrast_ratio(&background),
            accent: harmony.accent.contrast_ratio(&background),
        }
    }

    pub fn wcag_aa(&self) -> bool {
        self.text >= WCAG_AA_NORMAL
    }

    pub fn wcag_aaa(&self) -> bool {
        self.text >= WCAG_AAA_NORMAL
    }

    pub fn large_text_aa(&self) -> bool {
        self.text >= WCAG_AA_LARGE
    }
}

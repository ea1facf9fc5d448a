//! Request and configuration options for palette generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest accepted Jaro-Winkler similarity for fuzzy matches.
pub const FUZZY_THRESHOLD_MIN: f64 = 0.75;
/// Highest accepted Jaro-Winkler similarity for fuzzy matches.
pub const FUZZY_THRESHOLD_MAX: f64 = 0.8;

/// A single generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    /// Explicit seed. Without one the seed is folded from the wall clock and
    /// identical prompts may differ across calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Fold the millisecond timestamp instead of Unix seconds.
    #[serde(default)]
    pub force_variation: bool,
    /// Creation time stamped into the palette metadata instead of the
    /// generator's clock. Fix it together with `seed` for byte-identical
    /// output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_force_variation(mut self, enable: bool) -> Self {
        self.force_variation = enable;
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Options controlling pipeline behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Apply emotional saturation/lightness tuning to each role.
    pub emotional_tuning: bool,
    /// Run the single-pass repair when validation fails.
    pub auto_fix: bool,
    /// Contrast the text role must reach against the background.
    pub min_contrast: f64,
    /// Jaro-Winkler acceptance threshold, clamped to `[0.75, 0.8]`.
    pub fuzzy_threshold: f64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            emotional_tuning: true,
            auto_fix: true,
            min_contrast: crate::color::WCAG_AA_NORMAL,
            fuzzy_threshold: FUZZY_THRESHOLD_MAX,
        }
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient fuzzy matching at the low end of the accepted range.
    pub fn lenient() -> Self {
        Self {
            fuzzy_threshold: FUZZY_THRESHOLD_MIN,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_emotional_tuning(mut self, enable: bool) -> Self {
        self.emotional_tuning = enable;
        self
    }

    #[must_use]
    pub fn with_auto_fix(mut self, enable: bool) -> Self {
        self.auto_fix = enable;
        self
    }

    #[must_use]
    pub fn with_min_contrast(mut self, ratio: f64) -> Self {
        self.min_contrast = ratio.clamp(1.0, 21.0);
        self
    }

    #[must_use]
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold.clamp(FUZZY_THRESHOLD_MIN, FUZZY_THRESHOLD_MAX);
        self
    }
}

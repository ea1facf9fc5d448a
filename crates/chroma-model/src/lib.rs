#![deny(unsafe_code)]

pub mod analysis;
pub mod color;
pub mod context;
pub mod error;
pub mod harmony;
pub mod options;
pub mod palette;

pub use analysis::{Biases, HarmonyType, Language, MatchType, Mood, PromptAnalysis, WeightedColor};
pub use color::{
    ColorEntry, HslColor, WCAG_AA_LARGE, WCAG_AA_NORMAL, WCAG_AAA_NORMAL, clamp_percent,
    hue_difference, normalize_hue, weighted_hue_mean,
};
pub use context::{
    CoherenceFactors, ContextualWeights, IntentAnalysis, LightnessPreference, PrimaryIntent,
    SaturationPreference,
};
pub use error::{ChromaError, Result};
pub use harmony::{ColorHarmony, EmotionalProfile, HarmonyRole};
pub use options::{GenerationOptions, GenerationRequest};
pub use palette::{
    AccessibilityInfo, BaseColorSource, ColorGroup, ColorProvenance, ContextualTrace,
    EmotionalSummary, PaletteColors, PaletteMetadata, PaletteMode, SemanticPalette, StyleTag,
    Variations,
};

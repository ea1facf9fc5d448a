//! Harmony generation: one base color to five roles.
//!
//! Secondary and accent roles per harmony (hue offset, saturation factor,
//! lightness offset):
//!
//! | harmony             | secondary          | accent             |
//! |---------------------|--------------------|--------------------|
//! | complementary       | +180, ×0.80, +10   | +180, ×0.90, −5    |
//! | analogous           | +30, ×0.85, +8     | −30, ×0.90, −5     |
//! | triadic             | +120, ×0.80, +8    | +240, ×0.90, −5    |
//! | tetradic            | +90, ×0.80, +10    | +180, ×0.90, −5    |
//! | split-complementary | +150, ×0.80, +10   | +210, ×0.90, −5    |
//! | monochromatic       | 0, ×0.60, +20      | 0, ×1.10, −15      |
//!
//! Tetradic also carries its fourth hue (+270) into the background tint.

use chroma_model::{ColorHarmony, HarmonyType, HslColor, Mood, PaletteMode, PromptAnalysis};

/// Base saturation from which energetic and bold prompts go dark.
const VIVID_SATURATION: f64 = 85.0;
/// Lightness bias at or below which the palette goes dark.
const DARK_LIGHTNESS_BIAS: f64 = -0.3;
const DARK_TAGS: [&str; 3] = ["night", "dark", "neon"];

/// One derived role: hue offset, saturation factor, lightness offset.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RoleShift {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

const fn shift(hue: f64, saturation: f64, lightness: f64) -> RoleShift {
    RoleShift {
        hue,
        saturation,
        lightness,
    }
}

impl RoleShift {
    fn apply(self, base: HslColor) -> HslColor {
        HslColor::new(
            base.h + self.hue,
            base.s * self.saturation,
            base.l + self.lightness,
        )
    }
}

struct HarmonyShape {
    secondary: RoleShift,
    accent: RoleShift,
    background_hue: f64,
}

fn shape(harmony: HarmonyType) -> HarmonyShape {
    match harmony {
        HarmonyType::Complementary => HarmonyShape {
            secondary: shift(180.0, 0.8, 10.0),
            accent: shift(180.0, 0.9, -5.0),
            background_hue: 0.0,
        },
        HarmonyType::Analogous => HarmonyShape {
            secondary: shift(30.0, 0.85, 8.0),
            accent: shift(-30.0, 0.9, -5.0),
            background_hue: 0.0,
        },
        HarmonyType::Triadic => HarmonyShape {
            secondary: shift(120.0, 0.8, 8.0),
            accent: shift(240.0, 0.9, -5.0),
            background_hue: 0.0,
        },
        HarmonyType::Tetradic => HarmonyShape {
            secondary: shift(90.0, 0.8, 10.0),
            accent: shift(180.0, 0.9, -5.0),
            background_hue: 270.0,
        },
        HarmonyType::SplitComplementary => HarmonyShape {
            secondary: shift(150.0, 0.8, 10.0),
            accent: shift(210.0, 0.9, -5.0),
            background_hue: 0.0,
        },
        HarmonyType::Monochromatic => HarmonyShape {
            secondary: shift(0.0, 0.6, 20.0),
            accent: shift(0.0, 1.1, -15.0),
            background_hue: 0.0,
        },
    }
}

/// Dark for nocturnal, dark or neon prompts, a strongly negative lightness
/// bias, mysterious moods, or vivid energetic/bold bases.
pub fn palette_mode(analysis: &PromptAnalysis, base: &HslColor) -> PaletteMode {
    let dark_tag = DARK_TAGS.iter().any(|tag| analysis.has_context_tag(tag));
    let vivid = matches!(analysis.mood, Mood::Energetic | Mood::Bold) && base.s >= VIVID_SATURATION;
    if dark_tag
        || analysis.biases.lightness <= DARK_LIGHTNESS_BIAS
        || analysis.mood == Mood::Mysterious
        || vivid
    {
        PaletteMode::Dark
    } else {
        PaletteMode::Light
    }
}

/// Five-role harmony for `base`.
pub fn generate_harmony(base: HslColor, harmony: HarmonyType, mode: PaletteMode) -> ColorHarmony {
    let shape = shape(harmony);
    let background_hue = base.h + shape.background_hue;
    let (background, text) = match mode {
        PaletteMode::Light => (
            HslColor::new(background_hue, base.s * 0.15, 96.0),
            HslColor::new(base.h, base.s * 0.2, 10.0),
        ),
        PaletteMode::Dark => (
            HslColor::new(background_hue, base.s * 0.2, 8.0),
            HslColor::new(base.h, base.s * 0.1, 95.0),
        ),
    };
    ColorHarmony {
        primary: base,
        secondary: shape.secondary.apply(base),
        accent: shape.accent.apply(base),
        background,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complementary_roles_sit_opposite() {
        let harmony = generate_harmony(
            HslColor::new(200.0, 80.0, 50.0),
            HarmonyType::Complementary,
            PaletteMode::Light,
        );
        assert_eq!(harmony.secondary.h, 20.0);
        assert_eq!(harmony.accent.h, 20.0);
        assert!((harmony.accent.s - 72.0).abs() < 1e-9);
        assert_eq!(harmony.accent.l, 45.0);
    }

    #[test]
    fn monochromatic_keeps_hue_and_caps_saturation() {
        let harmony = generate_harmony(
            HslColor::new(120.0, 95.0, 50.0),
            HarmonyType::Monochromatic,
            PaletteMode::Light,
        );
        for color in harmony.to_array() {
            assert_eq!(color.h, 120.0);
        }
        assert_eq!(harmony.accent.s, 100.0);
    }

    #[test]
    fn dark_mode_inverts_extremes() {
        let harmony = generate_harmony(
            HslColor::new(300.0, 100.0, 50.0),
            HarmonyType::Tetradic,
            PaletteMode::Dark,
        );
        assert_eq!(harmony.background.l, 8.0);
        assert_eq!(harmony.background.h, 210.0);
        assert!(harmony.background.s <= 20.0);
        assert_eq!(harmony.text.l, 95.0);
    }
}

//! Emotional profile engine.

use chroma_model::{EmotionalProfile, HarmonyType, HslColor, Mood, PromptAnalysis};

const EMOTION_STEP: f64 = 0.15;

/// Direction of each scalar's nudge: `(energy, warmth, sophistication, playfulness)`.
type Nudge = (f64, f64, f64, f64);

const EMOTION_NUDGES: &[(&str, Nudge)] = &[
    ("joy", (1.0, 1.0, 0.0, 1.0)),
    ("calm", (-1.0, 0.0, 0.0, 0.0)),
    ("energy", (1.0, 0.0, 0.0, 0.0)),
    ("love", (0.0, 1.0, 0.0, 0.0)),
    ("sadness", (-1.0, -1.0, 0.0, 0.0)),
    ("mystery", (0.0, -1.0, 1.0, 0.0)),
    ("elegance", (0.0, 0.0, 1.0, -1.0)),
    ("confidence", (1.0, 0.0, 0.0, 0.0)),
    ("nostalgia", (0.0, 1.0, 0.0, 0.0)),
    ("playfulness", (0.0, 0.0, 0.0, 1.0)),
    ("trust", (0.0, 0.0, 1.0, 0.0)),
    ("freshness", (1.0, -1.0, 0.0, 0.0)),
];

/// Absolute mood nudges, between 0.2 and 0.3 per touched scalar.
fn mood_nudge(mood: Mood) -> Nudge {
    match mood {
        Mood::Energetic => (0.3, 0.0, 0.0, 0.0),
        Mood::Calm => (-0.3, 0.0, 0.0, 0.0),
        Mood::Bold => (0.25, 0.0, 0.0, 0.0),
        Mood::Elegant => (0.0, 0.0, 0.3, -0.2),
        Mood::Playful => (0.2, 0.0, 0.0, 0.3),
        Mood::Natural => (-0.2, 0.0, 0.0, 0.0),
        Mood::Mysterious => (0.0, -0.2, 0.2, 0.0),
        Mood::Romantic => (0.0, 0.3, 0.0, 0.0),
        Mood::Professional => (0.0, 0.0, 0.3, -0.2),
        Mood::Warm => (0.0, 0.3, 0.0, 0.0),
        Mood::Cool => (0.0, -0.3, 0.0, 0.0),
        Mood::Balanced => (0.0, 0.0, 0.0, 0.0),
    }
}

pub fn emotional_profile(analysis: &PromptAnalysis, harmony: HarmonyType) -> EmotionalProfile {
    let mut profile = EmotionalProfile::neutral(harmony);
    let mut add = |(energy, warmth, sophistication, playfulness): Nudge| {
        profile.energy += energy;
        profile.warmth += warmth;
        profile.sophistication += sophistication;
        profile.playfulness += playfulness;
    };

    for emotion in &analysis.emotions {
        let nudge = EMOTION_NUDGES
            .iter()
            .find(|(label, _)| *label == emotion.as_str());
        if let Some((_, (e, w, s, p))) = nudge {
            add((
                e * EMOTION_STEP,
                w * EMOTION_STEP,
                s * EMOTION_STEP,
                p * EMOTION_STEP,
            ));
        }
    }
    add(mood_nudge(analysis.mood));
    add((0.0, 0.2 * analysis.biases.temperature, 0.0, 0.0));

    EmotionalProfile {
        energy: profile.energy.clamp(0.0, 1.0),
        warmth: profile.warmth.clamp(0.0, 1.0),
        sophistication: profile.sophistication.clamp(0.0, 1.0),
        playfulness: profile.playfulness.clamp(0.0, 1.0),
        intensity: (0.5 + 0.5 * analysis.biases.intensity).clamp(0.0, 1.0),
        saturation_bias: analysis.biases.saturation,
        lightness_bias: analysis.biases.lightness,
        harmony,
    }
}

/// Nudges saturation and lightness toward the profile.
///
/// Saturation scales multiplicatively so near-neutral colors stay neutral.
/// The lightness shift is weighted by `1 - |l - 50| / 50`, which leaves the
/// extremes almost untouched.
pub fn apply_emotional_adjustments(color: HslColor, profile: &EmotionalProfile) -> HslColor {
    let saturation_factor = (1.0 + (profile.energy - 0.5) * 0.3 + (profile.playfulness - 0.5) * 0.2
        - (profile.sophistication - 0.5) * 0.2)
        * (1.0 + profile.saturation_bias * 0.25);
    let tonal = 1.0 - (color.l - 50.0).abs() / 50.0;
    let lightness_shift = ((profile.playfulness - 0.5) * 8.0 - (profile.sophistication - 0.5) * 6.0
        + profile.lightness_bias * 10.0)
        * tonal;
    HslColor::new(
        color.h,
        color.s * saturation_factor.max(0.0),
        color.l + lightness_shift,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_profile_leaves_colors_alone() {
        let profile = EmotionalProfile::neutral(HarmonyType::Analogous);
        let color = HslColor::new(210.0, 60.0, 40.0);
        assert_eq!(apply_emotional_adjustments(color, &profile), color);
    }

    #[test]
    fn extremes_barely_move() {
        let mut profile = EmotionalProfile::neutral(HarmonyType::Analogous);
        profile.lightness_bias = -1.0;
        let background = HslColor::new(0.0, 10.0, 96.0);
        let adjusted = apply_emotional_adjustments(background, &profile);
        assert!((adjusted.l - background.l).abs() < 1.0);
    }

    #[test]
    fn soft_sophisticated_profile_desaturates() {
        let mut profile = EmotionalProfile::neutral(HarmonyType::Analogous);
        profile.energy = 0.2;
        profile.sophistication = 0.8;
        profile.saturation_bias = -0.4;
        let adjusted = apply_emotional_adjustments(HslColor::new(270.0, 50.0, 60.0), &profile);
        assert!(adjusted.s < 40.0);
        assert_eq!(adjusted.h, 270.0);
    }
}

//! Five-role color harmonies and the emotional profile that tunes them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::HarmonyType;
use crate::color::HslColor;

/// Role of a color inside a [`ColorHarmony`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl HarmonyRole {
    /// Construction order; validation and repair walk roles in this order.
    pub const ALL: [HarmonyRole; 5] = [
        HarmonyRole::Primary,
        HarmonyRole::Secondary,
        HarmonyRole::Accent,
        HarmonyRole::Background,
        HarmonyRole::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonyRole::Primary => "primary",
            HarmonyRole::Secondary => "secondary",
            HarmonyRole::Accent => "accent",
            HarmonyRole::Background => "background",
            HarmonyRole::Text => "text",
        }
    }
}

impl fmt::Display for HarmonyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `text` is always validated against `background`; `accent` is the
/// highest-emphasis non-primary role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorHarmony {
    pub primary: HslColor,
    pub secondary: HslColor,
    pub accent: HslColor,
    pub background: HslColor,
    pub text: HslColor,
}

impl ColorHarmony {
    pub fn get(&self, role: HarmonyRole) -> HslColor {
        match role {
            HarmonyRole::Primary => self.primary,
            HarmonyRole::Secondary => self.secondary,
            HarmonyRole::Accent => self.accent,
            HarmonyRole::Background => self.background,
            HarmonyRole::Text => self.text,
        }
    }

    pub fn set(&mut self, role: HarmonyRole, color: HslColor) {
        match role {
            HarmonyRole::Primary => self.primary = color,
            HarmonyRole::Secondary => self.secondary = color,
            HarmonyRole::Accent => self.accent = color,
            HarmonyRole::Background => self.background = color,
            HarmonyRole::Text => self.text = color,
        }
    }

    /// Colors in construction order.
    pub fn to_array(&self) -> [HslColor; 5] {
        [
            self.primary,
            self.secondary,
            self.accent,
            self.background,
            self.text,
        ]
    }

    pub fn from_array(colors: [HslColor; 5]) -> Self {
        let [primary, secondary, accent, background, text] = colors;
        Self {
            primary,
            secondary,
            accent,
            background,
            text,
        }
    }

    /// Applies `f` to each role independently.
    #[must_use]
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(HarmonyRole, HslColor) -> HslColor,
    {
        let mut out = *self;
        for role in HarmonyRole::ALL {
            out.set(role, f(role, self.get(role)));
        }
        out
    }
}

/// Emotional scalars derived from an analysis, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalProfile {
    pub energy: f64,
    pub warmth: f64,
    pub sophistication: f64,
    pub playfulness: f64,
    pub intensity: f64,
    pub saturation_bias: f64,
    pub lightness_bias: f64,
    pub harmony: HarmonyType,
}

impl EmotionalProfile {
    /// Neutral profile: every scalar at its midpoint, no biases.
    pub fn neutral(harmony: HarmonyType) -> Self {
        Self {
            energy: 0.5,
            warmth: 0.5,
            sophistication: 0.5,
            playfulness: 0.5,
            intensity: 0.5,
            saturation_bias: 0.0,
            lightness_bias: 0.0,
            harmony,
        }
    }

    /// Name of the scalar that deviates furthest from neutral.
    pub fn dominant_trait(&self) -> &'static str {
        let traits = [
            ("energetic", self.energy),
            ("calm", 1.0 - self.energy),
            ("warm", self.warmth),
            ("cool", 1.0 - self.warmth),
            ("sophisticated", self.sophistication),
            ("playful", self.playfulness),
        ];
        let mut best = ("balanced", 0.55);
        for (name, value) in traits {
            if value > best.1 {
                best = (name, value);
            }
        }
        best.0
    }
}

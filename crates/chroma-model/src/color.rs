//! HSL colors and the numeric transforms shared by every pipeline stage.
//!
//! Hue is expressed in degrees `[0, 360)`, saturation and lightness in
//! percent `[0, 100]`. Conversions to RGB use the standard hue sextant
//! formula and relative luminance follows WCAG 2.1.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChromaError, Result};

/// Minimum contrast for normal-size text (WCAG 2.1 AA).
pub const WCAG_AA_NORMAL: f64 = 4.5;
/// Minimum contrast for normal-size text (WCAG 2.1 AAA).
pub const WCAG_AAA_NORMAL: f64 = 7.0;
/// Minimum contrast for large text (WCAG 2.1 AA).
pub const WCAG_AA_LARGE: f64 = 3.0;

/// A knowledge-base color. Values are integral so that two entries can be
/// compared (and de-duplicated) by strict equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorEntry {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl ColorEntry {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn to_hsl(self) -> HslColor {
        HslColor::new(
            f64::from(self.hue),
            f64::from(self.saturation),
            f64::from(self.lightness),
        )
    }
}

/// Hue/saturation/lightness triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslColor {
    /// Builds a color, wrapping the hue and clamping saturation/lightness.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    pub const BLACK: HslColor = HslColor {
        h: 0.0,
        s: 0.0,
        l: 0.0,
    };

    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        Self::new(self.h, s, self.l)
    }

    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Raises lightness by `amount` points, saturating at 100.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.with_lightness(self.l + amount)
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sextant = self.h / 60.0;
        let x = chroma * (1.0 - (sextant % 2.0 - 1.0).abs());
        let (r, g, b) = match sextant.floor() as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        (to_channel(r + m), to_channel(g + m), to_channel(b + m))
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;
        if delta == 0.0 {
            return Self::new(0.0, 0.0, l * 100.0);
        }
        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        Self::new(h, s * 100.0, l * 100.0)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{}", hex::encode([r, g, b]))
    }

    /// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.trim().trim_start_matches('#');
        let expanded = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            other => {
                return Err(ChromaError::InvalidHex {
                    value: value.to_string(),
                    reason: format!("expected 3 or 6 hex digits, found {other}"),
                });
            }
        };
        let bytes = hex::decode(&expanded).map_err(|error| ChromaError::InvalidHex {
            value: value.to_string(),
            reason: error.to_string(),
        })?;
        Ok(Self::from_rgb(bytes[0], bytes[1], bytes[2]))
    }

    /// Like [`HslColor::from_hex`] but yields black on malformed input.
    pub fn from_hex_lossy(value: &str) -> Self {
        Self::from_hex(value).unwrap_or(Self::BLACK)
    }

    /// WCAG 2.1 relative luminance in `[0, 1]`.
    pub fn relative_luminance(&self) -> f64 {
        let (r, g, b) = self.to_rgb();
        0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
    }

    /// WCAG contrast ratio in `[1, 21]`; symmetric.
    pub fn contrast_ratio(&self, other: &HslColor) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Shortest angular distance between two hues, in `[0, 180]`.
    pub fn hue_distance(&self, other: &HslColor) -> f64 {
        hue_difference(self.h, other.h)
    }

    /// Rounds each component to the nearest integer.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(self.h.round(), self.s.round(), self.l.round())
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.0}, {:.0}%, {:.0}%)", self.h, self.s, self.l)
    }
}

/// Wraps any hue into `[0, 360)`.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Clamps a percentage into `[0, 100]`; NaN becomes 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Shortest angular distance between two hues, in `[0, 180]`.
pub fn hue_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Weighted circular mean of `(hue, weight)` pairs. Returns `None` when the
/// total weight is zero or the hues cancel out exactly.
pub fn weighted_hue_mean<I>(hues: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (mut x, mut y, mut total) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (hue, weight) in hues {
        let radians = hue.to_radians();
        x += radians.cos() * weight;
        y += radians.sin() * weight;
        total += weight;
    }
    if total <= 0.0 || (x.abs() < 1e-9 && y.abs() < 1e-9) {
        return None;
    }
    Some(normalize_hue(y.atan2(x).to_degrees()))
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors_convert_to_hex() {
        assert_eq!(HslColor::new(0.0, 100.0, 50.0).to_hex(), "#ff0000");
        assert_eq!(HslColor::new(120.0, 100.0, 50.0).to_hex(), "#00ff00");
        assert_eq!(HslColor::new(240.0, 100.0, 50.0).to_hex(), "#0000ff");
        assert_eq!(HslColor::new(0.0, 0.0, 100.0).to_hex(), "#ffffff");
        assert_eq!(HslColor::new(0.0, 0.0, 0.0).to_hex(), "#000000");
    }

    #[test]
    fn hue_wraps_and_percentages_clamp() {
        let color = HslColor::new(-30.0, 140.0, -5.0);
        assert_eq!(color.h, 330.0);
        assert_eq!(color.s, 100.0);
        assert_eq!(color.l, 0.0);
        assert_eq!(HslColor::new(720.0, 50.0, 50.0).h, 0.0);
    }

    #[test]
    fn short_hex_expands() {
        let color = HslColor::from_hex("#f00").unwrap();
        assert_eq!(color.to_hex(), "#ff0000");
    }

    #[test]
    fn malformed_hex_is_rejected_or_black() {
        assert!(HslColor::from_hex("#12345").is_err());
        assert!(HslColor::from_hex("zzzzzz").is_err());
        assert_eq!(HslColor::from_hex_lossy("not a color"), HslColor::BLACK);
    }

    #[test]
    fn black_on_white_is_twenty_one() {
        let white = HslColor::new(0.0, 0.0, 100.0);
        let ratio = HslColor::BLACK.contrast_ratio(&white);
        assert!((ratio - 21.0).abs() < 1e-9);
        assert!((white.contrast_ratio(&HslColor::BLACK) - ratio).abs() < 1e-12);
    }

    #[test]
    fn hue_difference_takes_short_way_round() {
        assert_eq!(hue_difference(350.0, 10.0), 20.0);
        assert_eq!(hue_difference(0.0, 180.0), 180.0);
        assert_eq!(hue_difference(90.0, 90.0), 0.0);
    }

    #[test]
    fn weighted_hue_mean_respects_wraparound() {
        let mean = weighted_hue_mean([(350.0, 1.0), (10.0, 1.0)]).unwrap();
        assert!(mean < 0.5 || mean > 359.5, "got {mean}");
        assert!(weighted_hue_mean([(0.0, 0.0)]).is_none());
    }
}

//! Seed derivation and the seeded base-color perturbation.
//!
//! The seed folds a hash of the prompt with either an explicit caller value
//! or the clock (Unix seconds, or milliseconds when variation is forced),
//! modulo 100. Without an explicit seed, identical prompts may produce
//! different palettes in different seconds.

use chrono::{DateTime, Utc};
use chroma_model::{GenerationRequest, HslColor};
use sha2::{Digest, Sha256};

/// Knuth's multiplicative hashing constant.
const DRAW_MULTIPLIER: u64 = 2_654_435_761;
const SEED_MODULUS: u64 = 100;
const HUE_SPREAD: f64 = 30.0;
const SATURATION_SPREAD: f64 = 20.0;
const LIGHTNESS_SPREAD: f64 = 16.0;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    Explicit(u64),
    Clock { force_variation: bool },
}

impl SeedSource {
    pub fn from_request(request: &GenerationRequest) -> Self {
        match request.seed {
            Some(seed) => SeedSource::Explicit(seed),
            None => SeedSource::Clock {
                force_variation: request.force_variation,
            },
        }
    }
}

/// First eight bytes of SHA-256(prompt), big-endian.
pub fn prompt_hash(prompt: &str) -> u64 {
    let digest = Sha256::digest(prompt.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Seed in `0..100`.
pub fn derive_seed(prompt: &str, source: SeedSource, clock: &dyn Clock) -> u64 {
    let component = match source {
        SeedSource::Explicit(seed) => seed,
        SeedSource::Clock { force_variation } => {
            let now = clock.now();
            let value = if force_variation {
                now.timestamp_millis()
            } else {
                now.timestamp()
            };
            value.max(0).unsigned_abs()
        }
    };
    prompt_hash(prompt).wrapping_add(component) % SEED_MODULUS
}

/// Pseudo-random draw in `[0, 1)`.
pub fn draw(seed: u64) -> f64 {
    (seed.wrapping_mul(DRAW_MULTIPLIER) % SEED_MODULUS) as f64 / SEED_MODULUS as f64
}

/// Offsets applied to the chosen base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    /// Degrees, within ±15.
    pub hue: f64,
    /// Percentage points, within ±10.
    pub saturation: f64,
    /// Percentage points, within ±8.
    pub lightness: f64,
}

impl Perturbation {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            hue: (draw(seed) - 0.5) * HUE_SPREAD,
            saturation: (draw(seed.wrapping_add(1)) - 0.5) * SATURATION_SPREAD,
            lightness: (draw(seed.wrapping_add(2)) - 0.5) * LIGHTNESS_SPREAD,
        }
    }

    pub fn apply(&self, color: HslColor) -> HslColor {
        HslColor::new(
            color.h + self.hue,
            color.s + self.saturation,
            color.l + self.lightness,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn clock_at(millis: i64) -> FixedClock {
        FixedClock(Utc.timestamp_millis_opt(millis).single().expect("valid instant"))
    }

    #[test]
    fn draws_follow_the_multiplicative_transform() {
        assert_eq!(draw(0), 0.0);
        // 2654435761 % 100 == 61
        assert_eq!(draw(1), 0.61);
        assert_eq!(draw(2), 0.22);
    }

    #[test]
    fn explicit_seed_ignores_the_clock() {
        let a = derive_seed("ocean", SeedSource::Explicit(7), &clock_at(1_000));
        let b = derive_seed("ocean", SeedSource::Explicit(7), &clock_at(9_999_999));
        assert_eq!(a, b);
        assert!(a < 100);
    }

    #[test]
    fn seconds_clock_is_stable_within_a_second() {
        let source = SeedSource::Clock {
            force_variation: false,
        };
        let a = derive_seed("ocean", source, &clock_at(1_700_000_000_100));
        let b = derive_seed("ocean", source, &clock_at(1_700_000_000_900));
        assert_eq!(a, b);
    }

    #[test]
    fn forced_variation_uses_milliseconds() {
        let source = SeedSource::Clock {
            force_variation: true,
        };
        let a = derive_seed("ocean", source, &clock_at(1_700_000_000_100));
        let b = derive_seed("ocean", source, &clock_at(1_700_000_000_101));
        assert_ne!(a, b);
    }

    #[test]
    fn perturbation_stays_within_bounds() {
        for seed in 0..100 {
            let p = Perturbation::from_seed(seed);
            assert!(p.hue.abs() <= 15.0);
            assert!(p.saturation.abs() <= 10.0);
            assert!(p.lightness.abs() <= 8.0);
        }
    }
}

//! Palette color generation: emotional profile, seeded base color and the
//! five-role harmony built on it.

#![deny(unsafe_code)]

pub mod base;
pub mod emotion;
pub mod generator;
pub mod seed;

pub use base::{BaseSelection, blend, select_base};
pub use emotion::{apply_emotional_adjustments, emotional_profile};
pub use generator::{generate_harmony, palette_mode};
pub use seed::{Clock, FixedClock, Perturbation, SeedSource, SystemClock, derive_seed, draw, prompt_hash};

//! Accessibility repair, pairwise compatibility, palette validation and
//! coherence checks.

#![deny(unsafe_code)]

pub mod accessibility;
pub mod coherence;
pub mod compatibility;
pub mod palette;

pub use accessibility::{ContrastReport, ensure_accessibility};
pub use coherence::{CoherenceReport, validate_coherence};
pub use compatibility::{COMPATIBLE_SCORE, Compatibility, check_compatibility};
pub use palette::{
    MAX_ISSUES, PaletteValidation, VALID_SCORE, auto_fix_harmony, auto_fix_palette,
    validate_harmony, validate_palette,
};

//! Prompt-to-palette generation.
//!
//! [`PaletteGenerator`] wires the analysis, harmony and validation crates
//! into one synchronous pipeline and assembles the [`SemanticPalette`].

#![deny(unsafe_code)]

pub mod assembler;
pub mod generator;

pub use assembler::{AssemblyInput, assemble, palette_id, palette_name, style_tag};
pub use generator::{GenerationReport, PaletteGenerator, choose_harmony};

pub use chroma_harmony::{Clock, FixedClock, SystemClock};
pub use chroma_lexicon::KnowledgeBase;
pub use chroma_model::{GenerationOptions, GenerationRequest, SemanticPalette};

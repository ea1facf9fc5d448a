//! Prompt analysis for palette generation.
//!
//! [`PromptAnalyzer`] turns a prompt into a [`chroma_model::PromptAnalysis`];
//! [`ContextualIntelligence`] re-weights its colors and [`analyze_intent`]
//! infers what the palette is for.

#![deny(unsafe_code)]

pub mod analyzer;
pub mod context;
pub mod entities;
pub mod intent;
pub mod lexer;
pub mod matcher;
pub mod similarity;

pub use analyzer::PromptAnalyzer;
pub use context::ContextualIntelligence;
pub use intent::analyze_intent;
pub use lexer::{LexicalAnalysis, Token, detect_language, normalize, stem};
pub use matcher::{ColorExtraction, ColorMatcher};
pub use similarity::jaro_winkler;

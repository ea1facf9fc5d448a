//! Bilingual (English/Spanish) concept-to-color knowledge base.

#![deny(unsafe_code)]

mod builtin;
pub mod error;
pub mod knowledge;

pub use error::{LexiconError, Result};
pub use knowledge::{
    ColorRange, CompoundPhrase, KnowledgeBase, LanguageIndicators, Modifiers, MoodColor,
    MoodRange, MoodVocabulary, SynonymCandidate, Vocabulary,
};

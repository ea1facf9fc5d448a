//! Builtin knowledge-base tables.

mod colors;
mod ranges;
mod vocabulary;

use std::collections::BTreeMap;

use chroma_model::ColorEntry;

use crate::knowledge::{
    ColorRange, CompoundPhrase, KnowledgeBase, LanguageIndicators, Modifiers, MoodColor,
    MoodRange, MoodVocabulary, Vocabulary,
};

pub(crate) fn build() -> KnowledgeBase {
    KnowledgeBase {
        colors: color_map(colors::COLORS),
        synonyms: colors::SYNONYMS
            .iter()
            .map(|(term, list)| (term.to_string(), strings(list)))
            .collect(),
        compounds: colors::COMPOUNDS
            .iter()
            .map(|&(phrase, hue, saturation, lightness)| CompoundPhrase {
                phrase: phrase.to_string(),
                hue,
                saturation,
                lightness,
            })
            .collect(),
        modifiers: Modifiers {
            intensity: bias_map(vocabulary::INTENSITY),
            temperature: bias_map(vocabulary::TEMPERATURE),
            saturation: bias_map(vocabulary::SATURATION),
            lightness: bias_map(vocabulary::LIGHTNESS),
        },
        emotions: vocabularies(vocabulary::EMOTIONS),
        industries: vocabularies(vocabulary::INDUSTRIES),
        objects: strings(vocabulary::OBJECTS),
        brand_personalities: vocabularies(vocabulary::BRAND_PERSONALITIES),
        use_cases: vocabularies(vocabulary::USE_CASES),
        mood_keywords: vocabulary::MOOD_KEYWORDS
            .iter()
            .map(|(mood, words)| MoodVocabulary {
                mood: *mood,
                words: strings(words),
            })
            .collect(),
        harmony_keywords: vocabulary::HARMONY_KEYWORDS
            .iter()
            .map(|(word, harmony)| (word.to_string(), *harmony))
            .collect(),
        temporal_terms: strings(vocabulary::TEMPORAL_TERMS),
        environmental_terms: strings(vocabulary::ENVIRONMENTAL_TERMS),
        context_tags: vocabulary::CONTEXT_TAGS
            .iter()
            .map(|(word, tag)| (word.to_string(), tag.to_string()))
            .collect(),
        emotion_colors: color_map(ranges::EMOTION_COLORS),
        industry_colors: color_map(ranges::INDUSTRY_COLORS),
        mood_defaults: ranges::MOOD_DEFAULTS
            .iter()
            .map(|&(mood, hue, saturation, lightness)| MoodColor {
                mood,
                hue,
                saturation,
                lightness,
            })
            .collect(),
        mood_ranges: ranges::MOOD_RANGES
            .iter()
            .map(|&(mood, hues, saturation)| MoodRange {
                mood,
                range: ColorRange {
                    hues: hues.to_vec(),
                    saturation,
                },
            })
            .collect(),
        industry_ranges: ranges::INDUSTRY_RANGES
            .iter()
            .map(|&(industry, hues, saturation)| {
                (
                    industry.to_string(),
                    ColorRange {
                        hues: hues.to_vec(),
                        saturation,
                    },
                )
            })
            .collect(),
        stop_words: vocabulary::STOP_WORDS
            .iter()
            .map(|w| (*w).to_string())
            .collect(),
        language_indicators: LanguageIndicators {
            english: strings(vocabulary::ENGLISH_INDICATORS),
            spanish: strings(vocabulary::SPANISH_INDICATORS),
        },
    }
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

fn color_map(entries: &[(&str, u16, u8, u8)]) -> BTreeMap<String, ColorEntry> {
    entries
        .iter()
        .map(|&(term, h, s, l)| (term.to_string(), ColorEntry::new(h, s, l)))
        .collect()
}

fn bias_map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|&(word, bias)| (word.to_string(), bias))
        .collect()
}

fn vocabularies(entries: &[(&str, &[&str])]) -> Vec<Vocabulary> {
    entries
        .iter()
        .map(|(label, words)| Vocabulary::new(label, words))
        .collect()
}

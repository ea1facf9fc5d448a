//! Language detection, normalization, tokenization and stemming.

use chroma_lexicon::KnowledgeBase;
use chroma_model::Language;

const SPANISH_DIACRITICS: [char; 9] = ['á', 'é', 'í', 'ó', 'ú', 'ñ', '¿', '¡', 'ü'];
const SPANISH_SUFFIXES: [&str; 2] = ["ción", "dad"];
const ENGLISH_SUFFIXES: [&str; 2] = ["ing", "tion"];
/// Below this share of the total score both languages are considered present.
const MIXED_SHARE: f64 = 0.6;

/// `(suffix, replacement)`, longest first.
const ENGLISH_RULES: &[(&str, &str)] = &[
    ("ations", "ate"),
    ("ation", "ate"),
    ("ness", ""),
    ("ment", ""),
    ("ings", ""),
    ("ing", ""),
    ("ful", ""),
    ("less", ""),
    ("ies", "y"),
    ("ied", "y"),
    ("ly", ""),
    ("ed", ""),
];
const ENGLISH_MIN_STEM: usize = 3;

const SPANISH_RULES: &[(&str, &str)] = &[
    ("amientos", ""),
    ("amiento", ""),
    ("aciones", ""),
    ("ación", ""),
    ("acion", ""),
    ("idades", ""),
    ("idad", ""),
    ("mente", ""),
    ("istas", ""),
    ("ista", ""),
    ("osos", ""),
    ("osas", ""),
    ("oso", ""),
    ("osa", ""),
    ("es", ""),
    ("s", ""),
    ("a", ""),
    ("o", ""),
];
const SPANISH_MIN_STEM: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub stem: String,
}

/// Output of the lexical stage.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalAnalysis {
    pub language: Language,
    pub language_confidence: f64,
    pub normalized: String,
    pub tokens: Vec<Token>,
}

impl LexicalAnalysis {
    pub fn new(kb: &KnowledgeBase, prompt: &str) -> Self {
        let (language, language_confidence) = detect_language(kb, prompt);
        let normalized = normalize(prompt);
        let tokens = normalized
            .split_whitespace()
            .map(|text| Token {
                text: text.to_string(),
                stem: stem(text, language),
            })
            .collect();
        Self {
            language,
            language_confidence,
            normalized,
            tokens,
        }
    }

    /// Tokens eligible as keywords: at least three characters, not stop words.
    pub fn content_tokens<'a>(&'a self, kb: &'a KnowledgeBase) -> impl Iterator<Item = &'a Token> {
        self.tokens
            .iter()
            .filter(|t| t.text.chars().count() >= 3 && !kb.is_stop_word(&t.text))
    }
}

/// Scores diacritics, indicator words and suffixes for each language.
///
/// Returns the dominant language and its share of the total score, or
/// English with confidence 0.5 when nothing fires.
pub fn detect_language(kb: &KnowledgeBase, prompt: &str) -> (Language, f64) {
    let lowered = prompt.to_lowercase();
    let mut spanish = 0.0;
    let mut english = 0.0;

    spanish += 2.0 * lowered.chars().filter(|c| SPANISH_DIACRITICS.contains(c)).count() as f64;

    for word in normalize(&lowered).split_whitespace() {
        if kb.language_indicators.spanish.iter().any(|w| w == word) {
            spanish += 1.0;
        }
        if kb.language_indicators.english.iter().any(|w| w == word) {
            english += 1.0;
        }
        if SPANISH_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            spanish += 0.5;
        }
        if ENGLISH_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            english += 0.5;
        }
    }

    let total = spanish + english;
    if total == 0.0 {
        return (Language::English, 0.5);
    }
    let (winner, share) = if spanish > english {
        (Language::Spanish, spanish / total)
    } else {
        (Language::English, english / total)
    };
    if spanish > 0.0 && english > 0.0 && share < MIXED_SHARE {
        (Language::Mixed, share)
    } else {
        (winner, share)
    }
}

/// Lowercases, replaces punctuation (except hyphens) with spaces and
/// collapses whitespace.
pub fn normalize(prompt: &str) -> String {
    let cleaned: String = prompt
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Suffix-stripping stemmer. Mixed prompts use the English rules.
pub fn stem(word: &str, language: Language) -> String {
    match language {
        Language::Spanish => strip_suffix(word, SPANISH_RULES, SPANISH_MIN_STEM),
        Language::English | Language::Mixed => stem_english(word),
    }
}

fn stem_english(word: &str) -> String {
    let stripped = strip_suffix(word, ENGLISH_RULES, ENGLISH_MIN_STEM);
    if stripped != word {
        return stripped;
    }
    // Plurals: "-es" after sibilants, otherwise a bare "-s" (but not "-ss").
    let sibilant_plural = ["ses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|s| word.ends_with(s));
    if sibilant_plural {
        return strip_suffix(word, &[("es", "")], ENGLISH_MIN_STEM);
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return strip_suffix(word, &[("s", "")], ENGLISH_MIN_STEM);
    }
    word.to_string()
}

fn strip_suffix(word: &str, rules: &[(&str, &str)], min_stem: usize) -> String {
    for (suffix, replacement) in rules {
        if let Some(base) = word.strip_suffix(suffix)
            && base.chars().count() >= min_stem
        {
            return format!("{base}{replacement}");
        }
    }
    word.to_string()
}

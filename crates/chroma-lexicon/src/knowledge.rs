//! The knowledge base: every table the analyzer and generator consult.
//!
//! The builtin base is assembled once on first use. Callers can load a TOML
//! file with the same shape and [`KnowledgeBase::overlay`] it on top of the
//! builtin tables to add or override entries.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use chroma_model::{ColorEntry, HarmonyType, Mood};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LexiconError, Result};

static BUILTIN: LazyLock<KnowledgeBase> = LazyLock::new(crate::builtin::build);

/// Fallback when a knowledge base has no default for the requested mood.
const FALLBACK_COLOR: ColorEntry = ColorEntry::new(210, 50, 50);

/// A labeled word list (emotion, industry, brand personality, use case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub label: String,
    pub words: Vec<String>,
}

impl Vocabulary {
    pub fn new(label: &str, words: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            words: words.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

/// Keywords voting for one mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodVocabulary {
    pub mood: Mood,
    pub words: Vec<String>,
}

/// A multi-word phrase with its own color, matched before single tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundPhrase {
    pub phrase: String,
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl CompoundPhrase {
    pub fn color(&self) -> ColorEntry {
        ColorEntry::new(self.hue, self.saturation, self.lightness)
    }
}

/// Default color for a mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodColor {
    pub mood: Mood,
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

/// Hue/saturation envelope that fits a mood or industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    /// Inclusive hue spans. Empty means any hue.
    #[serde(default)]
    pub hues: Vec<(u16, u16)>,
    /// Inclusive saturation span.
    pub saturation: (u8, u8),
}

impl ColorRange {
    pub fn contains(&self, color: ColorEntry) -> bool {
        let hue_ok = self.hues.is_empty()
            || self
                .hues
                .iter()
                .any(|&(start, end)| (start..=end).contains(&color.hue));
        let (low, high) = self.saturation;
        hue_ok && (low..=high).contains(&color.saturation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRange {
    pub mood: Mood,
    pub range: ColorRange,
}

/// Modifier words and their bias contribution, each in `[-1, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub intensity: BTreeMap<String, f64>,
    pub temperature: BTreeMap<String, f64>,
    pub saturation: BTreeMap<String, f64>,
    pub lightness: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageIndicators {
    pub english: Vec<String>,
    pub spanish: Vec<String>,
}

/// A synonym-table candidate for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynonymCandidate<'a> {
    pub term: &'a str,
    /// The token was listed as a synonym and `term` is its canonical key.
    pub canonical: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBase {
    pub colors: BTreeMap<String, ColorEntry>,
    /// Canonical term to its synonyms (both languages).
    pub synonyms: BTreeMap<String, Vec<String>>,
    pub compounds: Vec<CompoundPhrase>,
    pub modifiers: Modifiers,
    pub emotions: Vec<Vocabulary>,
    pub industries: Vec<Vocabulary>,
    pub objects: Vec<String>,
    pub brand_personalities: Vec<Vocabulary>,
    /// Ordered by priority; the first matching use case wins.
    pub use_cases: Vec<Vocabulary>,
    pub mood_keywords: Vec<MoodVocabulary>,
    pub harmony_keywords: BTreeMap<String, HarmonyType>,
    pub temporal_terms: Vec<String>,
    pub environmental_terms: Vec<String>,
    /// Surface word to context tag.
    pub context_tags: BTreeMap<String, String>,
    pub emotion_colors: BTreeMap<String, ColorEntry>,
    pub industry_colors: BTreeMap<String, ColorEntry>,
    pub mood_defaults: Vec<MoodColor>,
    pub mood_ranges: Vec<MoodRange>,
    pub industry_ranges: BTreeMap<String, ColorRange>,
    pub stop_words: BTreeSet<String>,
    pub language_indicators: LanguageIndicators,
}

impl KnowledgeBase {
    /// The builtin bilingual tables.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::parse(source, "<inline>")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
        Self::parse(&source, &path.display().to_string())
    }

    fn parse(source: &str, origin: &str) -> Result<Self> {
        let kb: KnowledgeBase = toml::from_str(source).map_err(|source| LexiconError::Toml {
            origin: origin.to_string(),
            source,
        })?;
        kb.validate()?;
        debug!(
            origin,
            colors = kb.colors.len(),
            compounds = kb.compounds.len(),
            "loaded knowledge base"
        );
        Ok(kb)
    }

    /// Checks color components and ranges.
    pub fn validate(&self) -> Result<()> {
        let entries = self
            .colors
            .iter()
            .chain(&self.emotion_colors)
            .chain(&self.industry_colors)
            .map(|(name, color)| (name.as_str(), *color))
            .chain(self.compounds.iter().map(|c| (c.phrase.as_str(), c.color())));
        for (name, color) in entries {
            check_entry(name, color)?;
        }
        for default in &self.mood_defaults {
            check_entry(
                default.mood.as_str(),
                ColorEntry::new(default.hue, default.saturation, default.lightness),
            )?;
        }
        let ranges = self
            .mood_ranges
            .iter()
            .map(|r| (r.mood.as_str(), &r.range))
            .chain(self.industry_ranges.iter().map(|(k, r)| (k.as_str(), r)));
        for (name, range) in ranges {
            if range.saturation.0 > range.saturation.1 || range.saturation.1 > 100 {
                return Err(LexiconError::invalid(name, "saturation span out of order"));
            }
            if range.hues.iter().any(|&(start, end)| start > end || end > 360) {
                return Err(LexiconError::invalid(name, "hue span out of order"));
            }
        }
        Ok(())
    }

    /// Returns a copy of `self` with `other`'s entries added on top.
    ///
    /// Map entries in `other` replace existing keys. Labeled vocabularies
    /// with a known label gain the new words; unknown labels are appended.
    #[must_use]
    pub fn overlay(&self, other: &KnowledgeBase) -> KnowledgeBase {
        let mut merged = self.clone();
        merged.colors.extend(other.colors.clone());
        for (term, synonyms) in &other.synonyms {
            let target = merged.synonyms.entry(term.clone()).or_default();
            extend_unique(target, synonyms);
        }
        for compound in &other.compounds {
            match merged
                .compounds
                .iter_mut()
                .find(|c| c.phrase == compound.phrase)
            {
                Some(existing) => *existing = compound.clone(),
                None => merged.compounds.push(compound.clone()),
            }
        }
        merged
            .modifiers
            .intensity
            .extend(other.modifiers.intensity.clone());
        merged
            .modifiers
            .temperature
            .extend(other.modifiers.temperature.clone());
        merged
            .modifiers
            .saturation
            .extend(other.modifiers.saturation.clone());
        merged
            .modifiers
            .lightness
            .extend(other.modifiers.lightness.clone());
        merge_vocabularies(&mut merged.emotions, &other.emotions);
        merge_vocabularies(&mut merged.industries, &other.industries);
        merge_vocabularies(&mut merged.brand_personalities, &other.brand_personalities);
        merge_vocabularies(&mut merged.use_cases, &other.use_cases);
        extend_unique(&mut merged.objects, &other.objects);
        for entry in &other.mood_keywords {
            match merged.mood_keywords.iter_mut().find(|m| m.mood == entry.mood) {
                Some(existing) => extend_unique(&mut existing.words, &entry.words),
                None => merged.mood_keywords.push(entry.clone()),
            }
        }
        merged.harmony_keywords.extend(other.harmony_keywords.clone());
        extend_unique(&mut merged.temporal_terms, &other.temporal_terms);
        extend_unique(&mut merged.environmental_terms, &other.environmental_terms);
        merged.context_tags.extend(other.context_tags.clone());
        merged.emotion_colors.extend(other.emotion_colors.clone());
        merged.industry_colors.extend(other.industry_colors.clone());
        for default in &other.mood_defaults {
            merged.mood_defaults.retain(|d| d.mood != default.mood);
            merged.mood_defaults.push(default.clone());
        }
        for range in &other.mood_ranges {
            merged.mood_ranges.retain(|r| r.mood != range.mood);
            merged.mood_ranges.push(range.clone());
        }
        merged.industry_ranges.extend(other.industry_ranges.clone());
        merged.stop_words.extend(other.stop_words.iter().cloned());
        extend_unique(
            &mut merged.language_indicators.english,
            &other.language_indicators.english,
        );
        extend_unique(
            &mut merged.language_indicators.spanish,
            &other.language_indicators.spanish,
        );
        merged
    }

    pub fn color(&self, term: &str) -> Option<ColorEntry> {
        self.colors.get(term).copied()
    }

    /// Color keys in lexical order, which makes fuzzy tie-breaking stable.
    pub fn color_terms(&self) -> impl Iterator<Item = (&str, ColorEntry)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Candidate color terms reachable from `token` through the synonym
    /// table: canonical keys whose list names the token come first, then the
    /// other members of those lists, then the token's own synonyms.
    pub fn synonym_candidates(&self, token: &str) -> Vec<SynonymCandidate<'_>> {
        let groups: Vec<(&String, &Vec<String>)> = self
            .synonyms
            .iter()
            .filter(|(_, list)| list.iter().any(|s| s == token))
            .collect();
        let mut candidates: Vec<SynonymCandidate<'_>> = groups
            .iter()
            .map(|(canonical, _)| SynonymCandidate {
                term: canonical.as_str(),
                canonical: true,
            })
            .collect();
        for &(_, list) in &groups {
            candidates.extend(
                list.iter()
                    .filter(|sibling| *sibling != token)
                    .map(|sibling| SynonymCandidate {
                        term: sibling.as_str(),
                        canonical: false,
                    }),
            );
        }
        if let Some(list) = self.synonyms.get(token) {
            candidates.extend(list.iter().map(|s| SynonymCandidate {
                term: s.as_str(),
                canonical: false,
            }));
        }
        candidates
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn mood_default(&self, mood: Mood) -> ColorEntry {
        self.mood_defaults
            .iter()
            .find(|d| d.mood == mood)
            .map(|d| ColorEntry::new(d.hue, d.saturation, d.lightness))
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn mood_range(&self, mood: Mood) -> Option<&ColorRange> {
        self.mood_ranges
            .iter()
            .find(|r| r.mood == mood)
            .map(|r| &r.range)
    }

    pub fn industry_range(&self, industry: &str) -> Option<&ColorRange> {
        self.industry_ranges.get(industry)
    }

    pub fn emotion_color(&self, emotion: &str) -> Option<ColorEntry> {
        self.emotion_colors.get(emotion).copied()
    }

    pub fn industry_color(&self, industry: &str) -> Option<ColorEntry> {
        self.industry_colors.get(industry).copied()
    }

    pub fn context_tag(&self, word: &str) -> Option<&str> {
        self.context_tags.get(word).map(String::as_str)
    }

    pub fn harmony_keyword(&self, word: &str) -> Option<HarmonyType> {
        self.harmony_keywords.get(word).copied()
    }
}

fn check_entry(name: &str, color: ColorEntry) -> Result<()> {
    if color.hue > 360 {
        return Err(LexiconError::invalid(name, "hue must be within 0..=360"));
    }
    if color.saturation > 100 || color.lightness > 100 {
        return Err(LexiconError::invalid(
            name,
            "saturation and lightness must be within 0..=100",
        ));
    }
    Ok(())
}

fn extend_unique(target: &mut Vec<String>, extra: &[String]) {
    for word in extra {
        if !target.contains(word) {
            target.push(word.clone());
        }
    }
}

fn merge_vocabularies(target: &mut Vec<Vocabulary>, extra: &[Vocabulary]) {
    for vocabulary in extra {
        match target.iter_mut().find(|v| v.label == vocabulary.label) {
            Some(existing) => extend_unique(&mut existing.words, &vocabulary.words),
            None => target.push(vocabulary.clone()),
        }
    }
}

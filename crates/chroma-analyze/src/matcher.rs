//! Multi-strategy color extraction.
//!
//! Compound phrases are matched first against the normalized prompt. Each
//! token then tries exact, synonym, fuzzy and stemmed matching in that order
//! and stops at the first strategy that finds a color. Colors are
//! de-duplicated by their exact `(h, s, l)` key across all strategies; the
//! earlier match wins.

use std::collections::HashSet;

use chroma_lexicon::KnowledgeBase;
use chroma_model::{ColorEntry, Language, MatchType, WeightedColor};
use tracing::debug;

use crate::lexer::{LexicalAnalysis, Token, stem};
use crate::similarity::jaro_winkler;

const EXACT_WEIGHT: f64 = 1.0;
const CANONICAL_SYNONYM_WEIGHT: f64 = 0.9;
const SYNONYM_WEIGHT: f64 = 0.85;
const FUZZY_SCALE: f64 = 0.75;
const STEMMED_WEIGHT: f64 = 0.7;
const COMPOUND_WEIGHT: f64 = 0.95;

/// Colors and compound phrases found in one prompt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorExtraction {
    pub colors: Vec<WeightedColor>,
    pub compounds: Vec<String>,
}

pub struct ColorMatcher<'kb> {
    kb: &'kb KnowledgeBase,
    fuzzy_threshold: f64,
    /// `(key, stem, color)` in key order.
    stemmed_keys: Vec<(&'kb str, String, ColorEntry)>,
}

impl<'kb> ColorMatcher<'kb> {
    pub fn new(kb: &'kb KnowledgeBase, language: Language, fuzzy_threshold: f64) -> Self {
        let stemmed_keys = kb
            .color_terms()
            .map(|(key, color)| (key, stem(key, language), color))
            .collect();
        Self {
            kb,
            fuzzy_threshold,
            stemmed_keys,
        }
    }

    pub fn extract(&self, lexical: &LexicalAnalysis) -> ColorExtraction {
        let mut extraction = ColorExtraction::default();
        let mut seen = HashSet::new();

        for compound in &self.kb.compounds {
            if !lexical.normalized.contains(compound.phrase.as_str()) {
                continue;
            }
            extraction.compounds.push(compound.phrase.clone());
            let color = WeightedColor::new(
                compound.color(),
                COMPOUND_WEIGHT,
                MatchType::Compound,
                compound.phrase.clone(),
            );
            push_unique(&mut extraction.colors, &mut seen, color);
        }

        for token in lexical.content_tokens(self.kb) {
            if let Some(color) = self.match_token(token) {
                push_unique(&mut extraction.colors, &mut seen, color);
            }
        }
        extraction
    }

    /// First successful strategy for one token.
    pub fn match_token(&self, token: &Token) -> Option<WeightedColor> {
        self.exact(token)
            .or_else(|| self.synonym(token))
            .or_else(|| self.fuzzy(token))
            .or_else(|| self.stemmed(token))
    }

    fn exact(&self, token: &Token) -> Option<WeightedColor> {
        let color = self.kb.color(&token.text)?;
        Some(WeightedColor::new(
            color,
            EXACT_WEIGHT,
            MatchType::Exact,
            token.text.clone(),
        ))
    }

    fn synonym(&self, token: &Token) -> Option<WeightedColor> {
        self.kb
            .synonym_candidates(&token.text)
            .into_iter()
            .find_map(|candidate| {
                let color = self.kb.color(candidate.term)?;
                let weight = if candidate.canonical {
                    CANONICAL_SYNONYM_WEIGHT
                } else {
                    SYNONYM_WEIGHT
                };
                Some(WeightedColor::new(
                    color,
                    weight,
                    MatchType::Synonym,
                    token.text.clone(),
                ))
            })
    }

    fn fuzzy(&self, token: &Token) -> Option<WeightedColor> {
        let mut scored: Vec<(f64, ColorEntry)> = self
            .kb
            .color_terms()
            .filter(|(key, _)| *key != token.text)
            .map(|(key, color)| (jaro_winkler(&token.text, key), color))
            .filter(|(score, _)| *score >= self.fuzzy_threshold)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        let (score, color) = scored.first().copied()?;
        Some(WeightedColor::new(
            color,
            score * FUZZY_SCALE,
            MatchType::Fuzzy,
            token.text.clone(),
        ))
    }

    fn stemmed(&self, token: &Token) -> Option<WeightedColor> {
        self.stemmed_keys
            .iter()
            .find(|(key, key_stem, _)| *key != token.text && *key_stem == token.stem)
            .map(|(_, _, color)| {
                WeightedColor::new(
                    *color,
                    STEMMED_WEIGHT,
                    MatchType::Stemmed,
                    token.text.clone(),
                )
            })
    }
}

fn push_unique(colors: &mut Vec<WeightedColor>, seen: &mut HashSet<ColorEntry>, color: WeightedColor) {
    if seen.insert(color.color) {
        debug!(
            term = %color.original_term,
            match_type = color.match_type.as_str(),
            weight = color.weight,
            "color match"
        );
        colors.push(color);
    } else {
        debug!(term = %color.original_term, "duplicate color dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(prompt: &str) -> ColorExtraction {
        let kb = KnowledgeBase::builtin();
        let lexical = LexicalAnalysis::new(kb, prompt);
        ColorMatcher::new(kb, lexical.language, 0.8).extract(&lexical)
    }

    fn summary(extraction: &ColorExtraction) -> Vec<(String, MatchType)> {
        extraction
            .colors
            .iter()
            .map(|c| (c.original_term.clone(), c.match_type))
            .collect()
    }

    #[test]
    fn exact_match_has_full_weight() {
        let extraction = extract("ocean");
        assert_eq!(extraction.colors.len(), 1);
        assert_eq!(extraction.colors[0].weight, 1.0);
        assert_eq!(extraction.colors[0].match_type, MatchType::Exact);
    }

    #[test]
    fn reverse_synonym_falls_back_to_a_sibling_color() {
        let kb = KnowledgeBase::from_toml_str(
            r#"
            [colors]
            azure = { hue = 210, saturation = 80, lightness = 55 }

            [synonyms]
            sky = ["heaven", "azure"]
            "#,
        )
        .expect("knowledge base parses");
        let lexical = LexicalAnalysis::new(&kb, "heaven");
        let extraction = ColorMatcher::new(&kb, lexical.language, 0.8).extract(&lexical);
        assert_eq!(
            summary(&extraction),
            vec![("heaven".to_string(), MatchType::Synonym)]
        );
        assert_eq!(extraction.colors[0].color, ColorEntry::new(210, 80, 55));
        assert_eq!(extraction.colors[0].weight, 0.85);
    }

    #[test]
    fn reverse_synonym_resolves_canonical_term() {
        let extraction = extract("mar");
        assert_eq!(summary(&extraction), vec![("mar".to_string(), MatchType::Synonym)]);
        assert_eq!(extraction.colors[0].color, ColorEntry::new(200, 80, 45));
        assert_eq!(extraction.colors[0].weight, 0.9);
    }

    #[test]
    fn plural_falls_through_to_fuzzy() {
        let extraction = extract("oceans");
        assert_eq!(extraction.colors[0].match_type, MatchType::Fuzzy);
        assert_eq!(extraction.colors[0].color, ColorEntry::new(200, 80, 45));
        assert!(extraction.colors[0].weight > 0.7);
    }

    #[test]
    fn compounds_run_first_and_win_duplicates() {
        let extraction = extract("desert sand dunes");
        assert_eq!(extraction.compounds, vec!["desert sand".to_string()]);
        assert_eq!(extraction.colors[0].match_type, MatchType::Compound);
        assert_eq!(extraction.colors[0].weight, 0.95);
        // The single tokens still match their own entries.
        assert!(extraction.colors.iter().any(|c| c.original_term == "desert"));
        assert!(extraction.colors.iter().any(|c| c.original_term == "sand"));
    }

    #[test]
    fn duplicate_colors_keep_first_match() {
        // "azul" and "blue" share one entry.
        let extraction = extract("azul blue");
        assert_eq!(summary(&extraction), vec![("azul".to_string(), MatchType::Exact)]);
    }
}

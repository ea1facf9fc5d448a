//! Closed-vocabulary entity extraction: emotions, industries, objects,
//! brand personalities, use cases, mood, explicit harmony, modifier biases
//! and context tags.

use chroma_lexicon::{KnowledgeBase, Vocabulary};
use chroma_model::{Biases, HarmonyType, Mood};

use crate::lexer::Token;

/// Shortest vocabulary word that may match by containment.
const CONTAINMENT_MIN_CHARS: usize = 5;

/// Token equality, or containment of a long enough vocabulary word.
pub fn vocabulary_match(token: &str, word: &str) -> bool {
    token == word || (word.chars().count() >= CONTAINMENT_MIN_CHARS && token.contains(word))
}

/// Labels with at least one hit, in the order the prompt first mentions them.
pub fn match_labels(tokens: &[&Token], vocabularies: &[Vocabulary]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for token in tokens {
        for vocabulary in vocabularies {
            if labels.contains(&vocabulary.label) {
                continue;
            }
            if vocabulary
                .words
                .iter()
                .any(|word| vocabulary_match(&token.text, word))
            {
                labels.push(vocabulary.label.clone());
            }
        }
    }
    labels
}

pub fn match_objects(tokens: &[&Token], objects: &[String]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for token in tokens {
        for object in objects {
            if !found.contains(object) && vocabulary_match(&token.text, object) {
                found.push(object.clone());
            }
        }
    }
    found
}

/// First use-case category in priority order with any hit.
pub fn resolve_use_case(tokens: &[&Token], use_cases: &[Vocabulary]) -> Option<String> {
    use_cases
        .iter()
        .find(|category| {
            tokens.iter().any(|token| {
                category
                    .words
                    .iter()
                    .any(|word| vocabulary_match(&token.text, word))
            })
        })
        .map(|category| category.label.clone())
}

/// Mood with the most keyword hits over tokens and their stems; ties go to
/// the mood listed first, no hits to [`Mood::Balanced`].
pub fn score_mood(kb: &KnowledgeBase, tokens: &[&Token]) -> Mood {
    let mut best = (Mood::Balanced, 0usize);
    for entry in &kb.mood_keywords {
        let hits = tokens
            .iter()
            .filter(|token| {
                entry
                    .words
                    .iter()
                    .any(|word| *word == token.text || *word == token.stem)
            })
            .count();
        if hits > best.1 {
            best = (entry.mood, hits);
        }
    }
    best.0
}

/// Harmony named in the prompt, if any.
pub fn explicit_harmony(kb: &KnowledgeBase, tokens: &[&Token]) -> Option<HarmonyType> {
    tokens.iter().find_map(|token| {
        kb.harmony_keyword(&token.text)
            .or_else(|| kb.harmony_keyword(&token.stem))
    })
}

/// Sum of modifier contributions per token (token first, then stem), each
/// axis clamped to `[-1, 1]`.
pub fn extract_biases(kb: &KnowledgeBase, tokens: &[&Token]) -> Biases {
    let modifiers = &kb.modifiers;
    let mut biases = Biases::default();
    for token in tokens {
        let lookup = |table: &std::collections::BTreeMap<String, f64>| {
            table
                .get(&token.text)
                .or_else(|| table.get(&token.stem))
                .copied()
                .unwrap_or(0.0)
        };
        biases.intensity += lookup(&modifiers.intensity);
        biases.temperature += lookup(&modifiers.temperature);
        biases.saturation += lookup(&modifiers.saturation);
        biases.lightness += lookup(&modifiers.lightness);
    }
    Biases {
        intensity: biases.intensity.clamp(-1.0, 1.0),
        temperature: biases.temperature.clamp(-1.0, 1.0),
        saturation: biases.saturation.clamp(-1.0, 1.0),
        lightness: biases.lightness.clamp(-1.0, 1.0),
    }
}

pub fn context_tags(kb: &KnowledgeBase, tokens: &[&Token]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in tokens {
        let tag = kb
            .context_tag(&token.text)
            .or_else(|| kb.context_tag(&token.stem));
        if let Some(tag) = tag
            && !tags.iter().any(|t| t == tag)
        {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::LexicalAnalysis;

    fn with_tokens<T>(prompt: &str, f: impl FnOnce(&KnowledgeBase, &[&Token]) -> T) -> T {
        let kb = KnowledgeBase::builtin();
        let lexical = LexicalAnalysis::new(kb, prompt);
        let tokens: Vec<&Token> = lexical.tokens.iter().collect();
        f(kb, &tokens)
    }

    #[test]
    fn containment_needs_a_long_word() {
        assert!(vocabulary_match("healthcare", "health"));
        assert!(!vocabulary_match("party", "art"));
        assert!(vocabulary_match("art", "art"));
    }

    #[test]
    fn use_case_takes_first_category_in_priority_order() {
        let use_case = with_tokens("bakery website", |kb, tokens| {
            resolve_use_case(tokens, &kb.use_cases)
        });
        assert_eq!(use_case.as_deref(), Some("website"));
    }

    #[test]
    fn mood_ties_go_to_earlier_mood() {
        // One energetic word, one calm word.
        let mood = with_tokens("neon peaceful", |kb, tokens| score_mood(kb, tokens));
        assert_eq!(mood, Mood::Energetic);
        let mood = with_tokens("grey box", |kb, tokens| score_mood(kb, tokens));
        assert_eq!(mood, Mood::Balanced);
    }

    #[test]
    fn biases_sum_and_clamp() {
        let biases = with_tokens("neon electric vibrant nights", |kb, tokens| {
            extract_biases(kb, tokens)
        });
        assert_eq!(biases.saturation, 1.0);
        assert_eq!(biases.lightness, -0.4);
        assert_eq!(biases.temperature, 0.0);
    }

    #[test]
    fn harmony_keyword_is_explicit() {
        let harmony = with_tokens("split complementary sunset", |kb, tokens| {
            explicit_harmony(kb, tokens)
        });
        assert_eq!(harmony, Some(HarmonyType::SplitComplementary));
    }

    #[test]
    fn context_tags_use_stems_and_deduplicate() {
        let tags = with_tokens("cyberpunk neon city nights", |kb, tokens| {
            context_tags(kb, tokens)
        });
        insta::assert_json_snapshot!(tags, @r#"
        [
          "neon",
          "urban",
          "night"
        ]
        "#);
    }
}

//! Prompt analysis: stages 1 and 3 composed into an immutable [`PromptAnalysis`].

use chroma_lexicon::KnowledgeBase;
use chroma_model::{GenerationOptions, PromptAnalysis};
use tracing::debug;

use crate::entities;
use crate::lexer::{LexicalAnalysis, Token};
use crate::matcher::ColorMatcher;

/// Analyzes prompts against an injected knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct PromptAnalyzer<'kb> {
    kb: &'kb KnowledgeBase,
    options: GenerationOptions,
}

impl<'kb> PromptAnalyzer<'kb> {
    pub fn new(kb: &'kb KnowledgeBase, options: GenerationOptions) -> Self {
        Self { kb, options }
    }

    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    pub fn analyze(&self, prompt: &str) -> PromptAnalysis {
        let kb = self.kb;
        let lexical = LexicalAnalysis::new(kb, prompt);
        let content: Vec<&Token> = lexical.content_tokens(kb).collect();

        let mut keywords: Vec<String> = Vec::new();
        for token in &content {
            if !keywords.contains(&token.text) {
                keywords.push(token.text.clone());
            }
        }

        let extraction =
            ColorMatcher::new(kb, lexical.language, self.options.fuzzy_threshold).extract(&lexical);
        let emotions = entities::match_labels(&content, &kb.emotions);
        let industries = entities::match_labels(&content, &kb.industries);
        let objects = entities::match_objects(&content, &kb.objects);
        let brand_personality = entities::match_labels(&content, &kb.brand_personalities);
        let use_case = entities::resolve_use_case(&content, &kb.use_cases);
        let mood = entities::score_mood(kb, &content);
        let explicit = entities::explicit_harmony(kb, &content);
        let biases = entities::extract_biases(kb, &content);
        let context_tags = entities::context_tags(kb, &content);

        let confidence = analysis_confidence(&ConfidenceInputs {
            language_confidence: lexical.language_confidence,
            keywords: keywords.len(),
            colors: extraction.colors.len(),
            emotions: emotions.len(),
            has_purpose: !industries.is_empty() || use_case.is_some(),
            has_brand: !brand_personality.is_empty(),
            has_compounds: !extraction.compounds.is_empty(),
        });

        debug!(
            language = %lexical.language,
            keywords = keywords.len(),
            colors = extraction.colors.len(),
            %mood,
            confidence,
            "prompt analyzed"
        );

        PromptAnalysis {
            normalized: lexical.normalized,
            language: lexical.language,
            language_confidence: lexical.language_confidence,
            confidence,
            keywords,
            emotions,
            industries,
            objects,
            colors: extraction.colors,
            biases,
            harmony_type: explicit.unwrap_or_else(|| mood.default_harmony()),
            explicit_harmony: explicit.is_some(),
            mood,
            context_tags,
            brand_personality,
            use_case,
            compound_concepts: extraction.compounds,
        }
    }
}

struct ConfidenceInputs {
    language_confidence: f64,
    keywords: usize,
    colors: usize,
    emotions: usize,
    has_purpose: bool,
    has_brand: bool,
    has_compounds: bool,
}

fn saturating_share(count: usize, cap: usize) -> f64 {
    count.min(cap) as f64 / cap as f64
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

fn analysis_confidence(inputs: &ConfidenceInputs) -> f64 {
    let score = 0.3 * inputs.language_confidence
        + 0.2 * saturating_share(inputs.keywords, 5)
        + 0.2 * saturating_share(inputs.colors, 3)
        + 0.1 * saturating_share(inputs.emotions, 2)
        + 0.1 * flag(inputs.has_purpose)
        + 0.05 * flag(inputs.has_brand)
        + 0.05 * flag(inputs.has_compounds);
    score.clamp(0.0, 1.0)
}

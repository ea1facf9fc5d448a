//! Contextual intelligence: coherence factors and color re-weighting.

use chroma_lexicon::KnowledgeBase;
use chroma_model::{
    CoherenceFactors, ContextualWeights, Language, MatchType, PromptAnalysis, WeightedColor,
};
use tracing::debug;

use crate::lexer::stem;

const COMPOUND_BONUS: f64 = 0.15;
const TEMPORAL_SCALE: f64 = 0.1;
const EMOTIONAL_SCALE: f64 = 0.08;
const ENVIRONMENTAL_SCALE: f64 = 0.1;
const PURPOSEFUL_SCALE: f64 = 0.12;
const MOOD_RANGE_PENALTY: f64 = 0.15;
const USE_CASE_PURPOSE: f64 = 0.8;
const INDUSTRY_PURPOSE: f64 = 0.6;
const SECONDARY_COUNT: usize = 3;

pub struct ContextualIntelligence<'kb> {
    kb: &'kb KnowledgeBase,
}

impl<'kb> ContextualIntelligence<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn weigh(&self, analysis: &PromptAnalysis) -> ContextualWeights {
        let factors = self.coherence_factors(analysis);
        let mut adjusted: Vec<WeightedColor> = analysis
            .colors
            .iter()
            .map(|color| self.adjust(color, analysis, &factors))
            .collect();
        // Stable: equal weights keep extraction order.
        adjusted.sort_by(|a, b| b.weight.total_cmp(&a.weight));

        let primary_color = adjusted.first().cloned();
        let secondary_colors: Vec<WeightedColor> = adjusted
            .iter()
            .skip(1)
            .take(SECONDARY_COUNT)
            .cloned()
            .collect();
        let dominant_theme = dominant_theme(analysis, primary_color.as_ref());
        let intention_score = intention_score(analysis, &factors);

        debug!(
            theme = %dominant_theme,
            intention_score,
            primary = primary_color.as_ref().map(|c| c.original_term.as_str()),
            "contextual weights"
        );

        ContextualWeights {
            primary_color,
            secondary_colors,
            dominant_theme,
            intention_score,
            coherence_factors: factors,
            adjusted_colors: adjusted,
        }
    }

    /// Each factor is set only when the prompt carries evidence for it.
    pub fn coherence_factors(&self, analysis: &PromptAnalysis) -> CoherenceFactors {
        let temporal = count_terms(&analysis.keywords, &self.kb.temporal_terms, analysis.language);
        let environmental =
            count_terms(&analysis.keywords, &self.kb.environmental_terms, analysis.language);
        let purposeful = if analysis.use_case.is_some() {
            Some(USE_CASE_PURPOSE)
        } else if !analysis.industries.is_empty() {
            Some(INDUSTRY_PURPOSE)
        } else {
            None
        };
        CoherenceFactors {
            temporal: density(temporal, 3.0),
            emotional: density(analysis.emotions.len(), 4.0),
            environmental: density(environmental, 3.0),
            purposeful,
        }
    }

    fn adjust(
        &self,
        color: &WeightedColor,
        analysis: &PromptAnalysis,
        factors: &CoherenceFactors,
    ) -> WeightedColor {
        let kb = self.kb;
        let language = analysis.language;
        let term = color.original_term.as_str();
        let mut weight = color.weight;

        if color.match_type == MatchType::Compound {
            weight += COMPOUND_BONUS;
        }
        if let Some(temporal) = factors.temporal
            && term_in(term, &kb.temporal_terms, language)
        {
            weight += temporal * TEMPORAL_SCALE;
        }
        if let Some(emotional) = factors.emotional
            && kb
                .emotions
                .iter()
                .any(|e| term_in(term, &e.words, language))
        {
            weight += emotional * EMOTIONAL_SCALE;
        }
        if let Some(environmental) = factors.environmental
            && term_in(term, &kb.environmental_terms, language)
        {
            weight += environmental * ENVIRONMENTAL_SCALE;
        }
        if let Some(purposeful) = factors.purposeful
            && analysis
                .industries
                .iter()
                .filter_map(|industry| kb.industry_range(industry))
                .any(|range| range.contains(color.color))
        {
            weight += purposeful * PURPOSEFUL_SCALE;
        }
        if let Some(range) = kb.mood_range(analysis.mood)
            && !range.contains(color.color)
        {
            weight -= MOOD_RANGE_PENALTY;
        }

        WeightedColor::new(color.color, weight, color.match_type, color.original_term.clone())
    }
}

fn density(count: usize, scale: f64) -> Option<f64> {
    (count > 0).then(|| (count as f64 / scale).clamp(0.0, 1.0))
}

/// True when any word of `term` (or its stem) is listed.
fn term_in(term: &str, list: &[String], language: Language) -> bool {
    term.split_whitespace().any(|word| {
        let word_stem = stem(word, language);
        list.iter().any(|entry| *entry == word || *entry == word_stem)
    })
}

fn count_terms(keywords: &[String], list: &[String], language: Language) -> usize {
    keywords
        .iter()
        .filter(|keyword| term_in(keyword, list, language))
        .count()
}

/// Compound concept, then a confident primary color's term, then use case,
/// industry, dominant emotion and finally the mood.
fn dominant_theme(analysis: &PromptAnalysis, primary: Option<&WeightedColor>) -> String {
    if let Some(compound) = analysis.compound_concepts.first() {
        return compound.clone();
    }
    if let Some(primary) = primary
        && primary.weight > 0.8
    {
        return primary.original_term.clone();
    }
    analysis
        .use_case
        .clone()
        .or_else(|| analysis.industries.first().cloned())
        .or_else(|| analysis.dominant_emotion().map(str::to_string))
        .unwrap_or_else(|| analysis.mood.as_str().to_string())
}

fn intention_score(analysis: &PromptAnalysis, factors: &CoherenceFactors) -> f64 {
    let mut score: f64 = 0.5;
    if analysis.confidence >= 0.7 {
        score += 0.2;
    } else if analysis.confidence >= 0.4 {
        score += 0.1;
    }
    if analysis.use_case.is_some() {
        score += 0.15;
    }
    if !analysis.compound_concepts.is_empty() {
        score += 0.15;
    }
    if factors.any_above(0.7) {
        score += 0.1;
    }
    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::PromptAnalyzer;
    use chroma_model::GenerationOptions;

    fn weigh(prompt: &str) -> (PromptAnalysis, ContextualWeights) {
        let kb = KnowledgeBase::builtin();
        let analysis = PromptAnalyzer::new(kb, GenerationOptions::default()).analyze(prompt);
        let weights = ContextualIntelligence::new(kb).weigh(&analysis);
        (analysis, weights)
    }

    #[test]
    fn factors_without_evidence_stay_unset() {
        let (_, weights) = weigh("lavender");
        assert_eq!(weights.coherence_factors, CoherenceFactors::default());
    }

    #[test]
    fn off_mood_colors_are_penalized_and_ranked_lower() {
        let (_, weights) = weigh("cyberpunk neon electric city nights");
        let terms: Vec<&str> = weights
            .adjusted_colors
            .iter()
            .map(|c| c.original_term.as_str())
            .collect();
        assert_eq!(terms, ["cyberpunk", "neon", "electric", "city", "nights"]);
        let city = &weights.adjusted_colors[3];
        assert!(city.weight < 1.0);
        assert_eq!(weights.secondary_colors.len(), 3);
        assert_eq!(
            weights.primary_color.as_ref().map(|c| c.original_term.as_str()),
            Some("cyberpunk")
        );
    }

    #[test]
    fn compound_concept_dominates_theme() {
        let (_, weights) = weigh("sunset glow over the water");
        assert_eq!(weights.dominant_theme, "sunset glow");
        assert!(weights.intention_score >= 0.65);
    }

    #[test]
    fn weights_stay_in_unit_interval() {
        let (_, weights) = weigh("midnight blue winter night sky ocean beach");
        assert!(
            weights
                .adjusted_colors
                .iter()
                .all(|c| (0.0..=1.0).contains(&c.weight))
        );
    }
}

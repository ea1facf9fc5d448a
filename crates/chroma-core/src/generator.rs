//! End-to-end prompt-to-palette generation.
//!
//! Stages run strictly forward:
//! 1. **Analyze**: language, tokens, colors, entities, mood
//! 2. **Contextualize**: coherence factors, re-weighted colors, intent
//! 3. **Compose**: emotional profile, seeded base color, harmony, tuning
//! 4. **Validate**: palette validation, single-pass auto-fix, text contrast
//! 5. **Assemble**: semantic groups and metadata, then the coherence check

use std::sync::Arc;

use chroma_analyze::{ContextualIntelligence, PromptAnalyzer, analyze_intent};
use chroma_harmony::{
    BaseSelection, Clock, Perturbation, SeedSource, SystemClock, apply_emotional_adjustments,
    derive_seed, emotional_profile, generate_harmony, palette_mode, select_base,
};
use chroma_lexicon::KnowledgeBase;
use chroma_model::{
    ColorHarmony, ContextualWeights, EmotionalProfile, GenerationOptions, GenerationRequest,
    HarmonyType, IntentAnalysis, PaletteMode, PromptAnalysis, SemanticPalette,
};
use chroma_validate::{
    CoherenceReport, PaletteValidation, auto_fix_harmony, ensure_accessibility, validate_coherence,
    validate_harmony,
};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::assembler::{AssemblyInput, assemble};

/// Intent confidence from which the intent's harmony replaces the mood's.
const INTENT_HARMONY_CONFIDENCE: f64 = 0.7;
const REDACTED: &str = "[REDACTED]";

/// A palette plus the diagnostics that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub palette: SemanticPalette,
    /// Final five roles, including the secondary the palette groups omit.
    pub harmony: ColorHarmony,
    pub validation: PaletteValidation,
    pub coherence: CoherenceReport,
    pub analysis: PromptAnalysis,
}

/// Turns prompts into semantic palettes against one knowledge base.
///
/// Generation never fails; every stage degrades to a default.
#[derive(Clone)]
pub struct PaletteGenerator<'kb> {
    kb: &'kb KnowledgeBase,
    options: GenerationOptions,
    clock: Arc<dyn Clock>,
    log_prompts: bool,
}

impl std::fmt::Debug for PaletteGenerator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaletteGenerator")
            .field("options", &self.options)
            .field("log_prompts", &self.log_prompts)
            .finish_non_exhaustive()
    }
}

impl PaletteGenerator<'static> {
    /// Generator over the builtin knowledge base.
    pub fn builtin() -> Self {
        Self::new(KnowledgeBase::builtin())
    }
}

impl<'kb> PaletteGenerator<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self {
            kb,
            options: GenerationOptions::default(),
            clock: Arc::new(SystemClock),
            log_prompts: false,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Allow prompt text in log output. Off by default.
    #[must_use]
    pub fn with_prompt_logging(mut self, enable: bool) -> Self {
        self.log_prompts = enable;
        self
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    pub fn generate(&self, request: &GenerationRequest) -> SemanticPalette {
        self.generate_with_diagnostics(request).palette
    }

    pub fn generate_with_diagnostics(&self, request: &GenerationRequest) -> GenerationReport {
        let prompt = request.prompt.as_str();
        let shown = if self.log_prompts { prompt } else { REDACTED };
        let span = info_span!("generate", prompt = %shown);
        let _guard = span.enter();

        let analysis = info_span!("analyze").in_scope(|| self.analyze(prompt));
        let context = info_span!("contextualize").in_scope(|| self.contextualize(&analysis));
        let composition = info_span!("compose")
            .in_scope(|| self.compose(request, &analysis, &context));
        let (harmony, validation, auto_fixed) =
            info_span!("validate").in_scope(|| self.repair(composition.harmony));

        let palette = info_span!("assemble").in_scope(|| {
            assemble(&AssemblyInput {
                prompt,
                seed: composition.seed,
                created_at: request.created_at.unwrap_or_else(|| self.clock.now()),
                analysis: &analysis,
                weights: &context.weights,
                intent: &context.intent,
                profile: &composition.profile,
                harmony_type: composition.harmony_type,
                harmony: &harmony,
                mode: composition.mode,
                base: &composition.base,
                validation: &validation,
                auto_fixed,
            })
        });

        let coherence = validate_coherence(&analysis, &context.weights, &palette);
        for issue in &coherence.issues {
            warn!(score = coherence.score, %issue, "palette coherence");
        }
        info!(
            id = %palette.id,
            harmony = %composition.harmony_type,
            mood = %analysis.mood,
            valid = validation.valid,
            coherence = coherence.score,
            "palette generated"
        );

        GenerationReport {
            palette,
            harmony,
            validation,
            coherence,
            analysis,
        }
    }

    // ========================================================================
    // Stage 1: Analyze
    // ========================================================================

    fn analyze(&self, prompt: &str) -> PromptAnalysis {
        let analysis = PromptAnalyzer::new(self.kb, self.options).analyze(prompt);
        debug!(
            language = %analysis.language,
            mood = %analysis.mood,
            colors = analysis.colors.len(),
            confidence = analysis.confidence,
            "prompt analyzed"
        );
        analysis
    }

    // ========================================================================
    // Stage 2: Contextualize
    // ========================================================================

    fn contextualize(&self, analysis: &PromptAnalysis) -> Context {
        let weights = ContextualIntelligence::new(self.kb).weigh(analysis);
        let intent = analyze_intent(analysis);
        debug!(
            theme = %weights.dominant_theme,
            intention = weights.intention_score,
            intent = %intent.primary_intent,
            "context weighed"
        );
        Context { weights, intent }
    }

    // ========================================================================
    // Stage 3: Compose
    // ========================================================================

    fn compose(
        &self,
        request: &GenerationRequest,
        analysis: &PromptAnalysis,
        context: &Context,
    ) -> Composition {
        let harmony_type = choose_harmony(analysis, &context.intent);
        let profile = emotional_profile(analysis, harmony_type);
        let base = select_base(self.kb, analysis, &context.weights);
        let seed = derive_seed(
            &request.prompt,
            SeedSource::from_request(request),
            self.clock.as_ref(),
        );
        let perturbed = Perturbation::from_seed(seed).apply(base.color);
        let mode = palette_mode(analysis, &perturbed);

        let mut harmony = generate_harmony(perturbed, harmony_type, mode);
        if self.options.emotional_tuning {
            harmony = harmony.map(|_, color| apply_emotional_adjustments(color, &profile));
        }
        debug!(seed, base = %perturbed, ?mode, %harmony_type, "harmony composed");

        Composition {
            harmony_type,
            profile,
            base: BaseSelection {
                color: perturbed,
                source: base.source,
            },
            seed,
            mode,
            harmony,
        }
    }

    // ========================================================================
    // Stage 4: Validate
    // ========================================================================

    /// Validates, runs one auto-fix pass if needed, then repairs text
    /// contrast. The returned validation describes the final colors.
    fn repair(&self, mut harmony: ColorHarmony) -> (ColorHarmony, PaletteValidation, bool) {
        let initial = validate_harmony(&harmony);
        let auto_fixed = !initial.valid && self.options.auto_fix;
        if auto_fixed {
            debug!(
                score = initial.score,
                issues = initial.issues.len(),
                "auto-fixing palette"
            );
            harmony = auto_fix_harmony(&harmony);
        }
        harmony.text = ensure_accessibility(harmony.text, harmony.background, self.options.min_contrast);

        let validation = validate_harmony(&harmony);
        if auto_fixed && !validation.valid {
            warn!(
                score = validation.score,
                issues = validation.issues.len(),
                "palette still invalid after auto-fix"
            );
        }
        (harmony, validation, auto_fixed)
    }
}

struct Context {
    weights: ContextualWeights,
    intent: IntentAnalysis,
}

struct Composition {
    harmony_type: HarmonyType,
    profile: EmotionalProfile,
    base: BaseSelection,
    seed: u64,
    mode: PaletteMode,
    harmony: ColorHarmony,
}

/// An explicit harmony keyword wins, then a confident intent, then the mood.
pub fn choose_harmony(analysis: &PromptAnalysis, intent: &IntentAnalysis) -> HarmonyType {
    if analysis.explicit_harmony {
        analysis.harmony_type
    } else if intent.confidence >= INTENT_HARMONY_CONFIDENCE {
        intent.suggested_harmony
    } else {
        analysis.harmony_type
    }
}

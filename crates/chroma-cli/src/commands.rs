use std::borrow::Cow;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{debug, info};

use chroma_analyze::{ContextualIntelligence, PromptAnalyzer, analyze_intent};
use chroma_cli::logging::{log_prompts_enabled, redact_prompt};
use chroma_cli::summary::{
    analysis_table, color_matches_table, contrast_table, findings_table, harmony_table,
    metadata_table, palette_table,
};
use chroma_core::{GenerationRequest, PaletteGenerator};
use chroma_harmony::generate_harmony;
use chroma_lexicon::KnowledgeBase;
use chroma_model::{
    ColorHarmony, ContextualWeights, GenerationOptions, HslColor, IntentAnalysis, PaletteMode,
    PromptAnalysis, WCAG_AA_LARGE, WCAG_AA_NORMAL, WCAG_AAA_NORMAL,
};
use chroma_validate::{PaletteValidation, check_compatibility, validate_harmony};

use crate::cli::{
    AnalyzeArgs, ContrastArgs, GenerateArgs, HarmonyArgs, KnowledgeBaseArgs, OutputFormatArg,
};

const MIN_RATIO: f64 = 1.0;
const MAX_RATIO: f64 = 21.0;

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    if !(MIN_RATIO..=MAX_RATIO).contains(&args.min_contrast) {
        bail!(
            "--min-contrast must be between {MIN_RATIO} and {MAX_RATIO}, got {}",
            args.min_contrast
        );
    }
    let kb = load_knowledge_base(&args.knowledge_base)?;
    let options = base_options(args.lenient)
        .with_emotional_tuning(!args.no_tuning)
        .with_auto_fix(!args.no_auto_fix)
        .with_min_contrast(args.min_contrast);

    let mut request = GenerationRequest::new(&args.prompt).with_force_variation(args.vary);
    if let Some(seed) = args.seed {
        request = request.with_seed(seed);
    }
    if let Some(created_at) = args.created_at {
        request = request.with_created_at(created_at);
    }
    debug!(prompt = %redact_prompt(&args.prompt), seed = ?args.seed, "generate requested");

    let generator = PaletteGenerator::new(&kb)
        .with_options(options)
        .with_prompt_logging(log_prompts_enabled());
    let report = generator.generate_with_diagnostics(&request);

    match args.format {
        OutputFormatArg::Json if args.diagnostics => print_json(&report),
        OutputFormatArg::Json => print_json(&report.palette),
        OutputFormatArg::Table => {
            println!("{}", report.palette.description);
            println!("{}", palette_table(&report.palette));
            println!("{}", metadata_table(&report.palette));
            if args.diagnostics {
                println!("{}", harmony_table(&report.harmony));
                println!(
                    "{}",
                    color_matches_table(&report.palette.metadata.contextual_analysis.weights)
                );
                if let Some(table) = findings_table(&report.validation, Some(&report.coherence)) {
                    println!("{table}");
                }
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeOutput {
    analysis: PromptAnalysis,
    weights: ContextualWeights,
    intent: IntentAnalysis,
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let kb = load_knowledge_base(&args.knowledge_base)?;
    let analysis = PromptAnalyzer::new(&kb, base_options(args.lenient)).analyze(&args.prompt);
    let weights = ContextualIntelligence::new(&kb).weigh(&analysis);
    let intent = analyze_intent(&analysis);
    info!(
        mood = %analysis.mood,
        colors = analysis.colors.len(),
        intent = %intent.primary_intent,
        "prompt analyzed"
    );

    match args.format {
        OutputFormatArg::Json => print_json(&AnalyzeOutput {
            analysis,
            weights,
            intent,
        }),
        OutputFormatArg::Table => {
            println!("{}", analysis_table(&analysis, &weights, &intent));
            if !weights.adjusted_colors.is_empty() {
                println!("{}", color_matches_table(&weights));
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContrastOutput {
    foreground: String,
    background: String,
    ratio: f64,
    wcag_aa: bool,
    wcag_aaa: bool,
    large_text_aa: bool,
    compatibility_score: f64,
    compatible: bool,
    warnings: Vec<String>,
}

pub fn run_contrast(args: &ContrastArgs) -> Result<()> {
    let foreground = HslColor::from_hex(&args.foreground)
        .with_context(|| format!("invalid foreground color '{}'", args.foreground))?;
    let background = HslColor::from_hex(&args.background)
        .with_context(|| format!("invalid background color '{}'", args.background))?;
    let compatibility = check_compatibility(&foreground, &background);

    match args.format {
        OutputFormatArg::Json => {
            let ratio = compatibility.contrast;
            print_json(&ContrastOutput {
                foreground: foreground.to_hex(),
                background: background.to_hex(),
                ratio,
                wcag_aa: ratio >= WCAG_AA_NORMAL,
                wcag_aaa: ratio >= WCAG_AAA_NORMAL,
                large_text_aa: ratio >= WCAG_AA_LARGE,
                compatibility_score: compatibility.score,
                compatible: compatibility.compatible,
                warnings: compatibility.warnings,
            })
        }
        OutputFormatArg::Table => {
            println!(
                "{}",
                contrast_table(&foreground, &background, &compatibility)
            );
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct HarmonyOutput {
    harmony: ColorHarmony,
    hex: [String; 5],
    validation: PaletteValidation,
}

pub fn run_harmony(args: &HarmonyArgs) -> Result<()> {
    for (flag, value) in [("saturation", args.saturation), ("lightness", args.lightness)] {
        if !(0.0..=100.0).contains(&value) {
            bail!("--{flag} must be between 0 and 100, got {value}");
        }
    }
    let base = HslColor::new(args.hue, args.saturation, args.lightness);
    let mode = if args.dark {
        PaletteMode::Dark
    } else {
        PaletteMode::Light
    };
    let harmony = generate_harmony(base, args.kind.into(), mode);
    let validation = validate_harmony(&harmony);

    match args.format {
        OutputFormatArg::Json => print_json(&HarmonyOutput {
            hex: harmony.to_array().map(|color| color.to_hex()),
            harmony,
            validation,
        }),
        OutputFormatArg::Table => {
            println!("{}", harmony_table(&harmony));
            if let Some(table) = findings_table(&validation, None) {
                println!("{table}");
            }
            Ok(())
        }
    }
}

fn base_options(lenient: bool) -> GenerationOptions {
    if lenient {
        GenerationOptions::lenient()
    } else {
        GenerationOptions::default()
    }
}

/// The builtin knowledge base, with the `--knowledge-base` file layered on
/// top when given.
fn load_knowledge_base(args: &KnowledgeBaseArgs) -> Result<Cow<'static, KnowledgeBase>> {
    let builtin = KnowledgeBase::builtin();
    let Some(path) = &args.knowledge_base else {
        return Ok(Cow::Borrowed(builtin));
    };
    let overlay = KnowledgeBase::from_path(path)
        .with_context(|| format!("failed to load knowledge base {}", path.display()))?;
    info!(path = %path.display(), "knowledge base overlay loaded");
    Ok(Cow::Owned(builtin.overlay(&overlay)))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

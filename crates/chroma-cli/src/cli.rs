//! CLI argument definitions.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use chroma_model::HarmonyType;

#[derive(Parser)]
#[command(
    name = "chroma",
    version,
    about = "Generate accessible color palettes from text prompts",
    long_about = "Generate semantic color palettes from free-text prompts.\n\n\
                  Prompts may be English, Spanish or mixed. Palettes carry background,\n\
                  primary, accent and text roles with WCAG contrast metadata."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow prompt text to appear in logs.
    #[arg(long = "log-prompts", global = true)]
    pub log_prompts: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a palette from a prompt.
    Generate(GenerateArgs),

    /// Show how a prompt is analyzed without generating colors.
    Analyze(AnalyzeArgs),

    /// Measure WCAG contrast and compatibility of two hex colors.
    Contrast(ContrastArgs),

    /// Build the raw five-role harmony for one base color.
    Harmony(HarmonyArgs),
}

#[derive(Args)]
pub struct KnowledgeBaseArgs {
    /// TOML file layered over the builtin knowledge base.
    #[arg(long = "knowledge-base", value_name = "PATH")]
    pub knowledge_base: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Free-text description of the palette.
    #[arg(value_name = "PROMPT")]
    pub prompt: String,

    /// Explicit seed for reproducible output.
    ///
    /// Without a seed the wall clock is folded in and repeated calls may
    /// return different palettes.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Fold the millisecond timestamp into the seed (ignored with --seed).
    #[arg(long = "vary")]
    pub vary: bool,

    /// Creation time written into the palette metadata, e.g.
    /// 2025-10-09T12:00:00Z. Together with --seed the output is byte-identical.
    #[arg(long = "created-at", value_name = "RFC3339", value_parser = parse_created_at)]
    pub created_at: Option<DateTime<Utc>>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Include validation, coherence and analysis diagnostics.
    #[arg(long = "diagnostics")]
    pub diagnostics: bool,

    /// Skip emotional saturation/lightness tuning.
    #[arg(long = "no-tuning")]
    pub no_tuning: bool,

    /// Skip the auto-fix pass for invalid palettes.
    #[arg(long = "no-auto-fix")]
    pub no_auto_fix: bool,

    /// Minimum text/background contrast ratio.
    #[arg(long = "min-contrast", value_name = "RATIO", default_value_t = 4.5)]
    pub min_contrast: f64,

    /// Accept weaker fuzzy matches.
    #[arg(long = "lenient")]
    pub lenient: bool,

    #[command(flatten)]
    pub knowledge_base: KnowledgeBaseArgs,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Free-text description to analyze.
    #[arg(value_name = "PROMPT")]
    pub prompt: String,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Accept weaker fuzzy matches.
    #[arg(long = "lenient")]
    pub lenient: bool,

    #[command(flatten)]
    pub knowledge_base: KnowledgeBaseArgs,
}

#[derive(Args)]
pub struct ContrastArgs {
    /// Foreground color, `#rgb` or `#rrggbb`.
    #[arg(value_name = "FG")]
    pub foreground: String,

    /// Background color, `#rgb` or `#rrggbb`.
    #[arg(value_name = "BG")]
    pub background: String,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct HarmonyArgs {
    /// Base hue in degrees; wraps into [0, 360).
    #[arg(long = "hue", allow_negative_numbers = true)]
    pub hue: f64,

    /// Base saturation, 0 to 100.
    #[arg(long = "saturation")]
    pub saturation: f64,

    /// Base lightness, 0 to 100.
    #[arg(long = "lightness")]
    pub lightness: f64,

    /// Harmony type.
    #[arg(long = "kind", value_enum, default_value = "complementary")]
    pub kind: HarmonyArg,

    /// Use the dark background/text pair.
    #[arg(long = "dark")]
    pub dark: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Table,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HarmonyArg {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
    Monochromatic,
}

impl From<HarmonyArg> for HarmonyType {
    fn from(value: HarmonyArg) -> Self {
        match value {
            HarmonyArg::Complementary => HarmonyType::Complementary,
            HarmonyArg::Analogous => HarmonyType::Analogous,
            HarmonyArg::Triadic => HarmonyType::Triadic,
            HarmonyArg::Tetradic => HarmonyType::Tetradic,
            HarmonyArg::SplitComplementary => HarmonyType::SplitComplementary,
            HarmonyArg::Monochromatic => HarmonyType::Monochromatic,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_created_at(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|error| format!("expected an RFC 3339 timestamp: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn created_at_accepts_offsets() {
        let parsed = parse_created_at("2025-10-09T14:00:00+02:00").expect("valid timestamp");
        let expected = Utc
            .with_ymd_and_hms(2025, 10, 9, 12, 0, 0)
            .single()
            .expect("valid instant");
        assert_eq!(parsed, expected);
        assert!(parse_created_at("yesterday").is_err());
    }

    #[test]
    fn generate_reads_created_at() {
        let cli = Cli::try_parse_from([
            "chroma",
            "generate",
            "ocean breeze",
            "--seed",
            "3",
            "--created-at",
            "2025-10-09T12:00:00Z",
        ])
        .expect("arguments parse");
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.seed, Some(3));
        assert_eq!(
            args.created_at.map(|time| time.timestamp()),
            Some(1_760_011_200)
        );
    }
}

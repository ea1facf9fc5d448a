//! Logging setup on `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: fatal CLI errors
//! - `warn`: palettes still invalid after auto-fix, coherence findings
//! - `info`: one line per generated palette
//! - `debug`: per-stage detail (matches, weights, chosen base, seed)
//! - `trace`: everything else
//!
//! Prompts are user content and are redacted unless `--log-prompts` is set.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOG_PROMPTS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder logged instead of prompt text.
pub const REDACTED_VALUE: &str = "[REDACTED]";

const CRATES: [&str; 7] = [
    "chroma_cli",
    "chroma_core",
    "chroma_analyze",
    "chroma_harmony",
    "chroma_lexicon",
    "chroma_model",
    "chroma_validate",
];

pub fn log_prompts_enabled() -> bool {
    LOG_PROMPTS_ENABLED.load(Ordering::Relaxed)
}

/// The prompt itself when prompt logging is on, otherwise [`REDACTED_VALUE`].
pub fn redact_prompt(prompt: &str) -> &str {
    if log_prompts_enabled() {
        prompt
    } else {
        REDACTED_VALUE
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter`.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    pub with_target: bool,
    /// Emit span close events (JSON only).
    pub with_spans: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append logs here instead of stderr.
    pub log_file: Option<PathBuf>,
    pub log_prompts: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_spans: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_prompts: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_log_prompts(mut self, enable: bool) -> Self {
        self.log_prompts = enable;
        self
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// # Errors
///
/// Fails when the log file cannot be opened or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, SharedFileWriter::new(file))
    } else {
        init_logging_with_writer(config, io::stderr)
    }
}

pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> io::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    LOG_PROMPTS_ENABLED.store(config.log_prompts, Ordering::Release);
    let filter = build_env_filter(config.level_filter, config.use_env_filter);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(config.with_target)
                    .with_span_events(if config.with_spans {
                        fmt::format::FmtSpan::CLOSE
                    } else {
                        fmt::format::FmtSpan::NONE
                    }),
            )
            .try_init(),
        LogFormat::Compact if config.with_timestamps => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Pretty if config.with_timestamps => registry
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .without_time()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(config.with_target),
            )
            .try_init(),
    };
    result.map_err(io::Error::other)
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Our crates at `level`, everything else at warn. `RUST_LOG` wins when
/// `use_env` is set.
fn build_env_filter(level: LevelFilter, use_env: bool) -> EnvFilter {
    let defaults = || EnvFilter::new(default_directives(level));
    if use_env {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| defaults())
    } else {
        defaults()
    }
}

fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        insta::assert_snapshot!(default_directives(LevelFilter::DEBUG), @"warn,chroma_cli=debug,chroma_core=debug,chroma_analyze=debug,chroma_harmony=debug,chroma_lexicon=debug,chroma_model=debug,chroma_validate=debug");
    }

    #[test]
    fn prompts_are_redacted_by_default() {
        assert_eq!(redact_prompt("secret launch"), REDACTED_VALUE);
    }
}

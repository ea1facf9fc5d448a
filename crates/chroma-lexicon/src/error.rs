use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read knowledge base {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse knowledge base {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid knowledge base entry {entry}: {message}")]
    InvalidEntry { entry: String, message: String },
}

impl LexiconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            entry: entry.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LexiconError>;

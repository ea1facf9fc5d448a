use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChromaError {
    #[error("invalid hex color '{value}': {reason}")]
    InvalidHex { value: String, reason: String },
    #[error("unknown harmony type: {0}")]
    UnknownHarmony(String),
    #[error("unknown mood: {0}")]
    UnknownMood(String),
}

pub type Result<T> = std::result::Result<T, ChromaError>;

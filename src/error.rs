use thiserror::Error;

/// Errors that can occur while turning a video into a recipe document
#[derive(Error, Debug)]
pub enum ImportError {
    /// Transcript or video metadata could not be obtained
    #[error("Transcript error: {0}")]
    TranscriptError(String),

    /// The generation model call failed
    #[error("Generation failed: {0}")]
    GenerationError(String),

    /// A persisted recipe record is not valid JSON for a recipe
    #[error("Invalid recipe record: {0}")]
    RecordError(#[from] serde_json::Error),

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

//! Error types for the marketing studio.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the marketing studio.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Gemini API key not configured. Set GEMINI_API_KEY environment variable")]
    ApiKeyMissing,

    // Input errors
    #[error("Missing required field: {0}")]
    Validation(String),

    // Provider errors
    #[error("Provider request failed: {0}")]
    Provider(String),

    #[error("Could not decode provider response for {0}")]
    InvalidResponse(String),

    #[error("Image generation failed: {0}")]
    GenerationFailed(String),

    // Scenario pipeline errors
    #[error("A scenario pipeline run is already in flight")]
    PipelineBusy,

    #[error("Scenario pipeline run was cancelled")]
    Cancelled,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error looks like a provider rate-limit or quota rejection.
    ///
    /// Markers: HTTP 429, `RESOURCE_EXHAUSTED`, or the word `quota` anywhere
    /// in the error text.
    pub fn is_rate_limited(&self) -> bool {
        let text = self.to_string();
        text.contains("429") || text.contains("RESOURCE_EXHAUSTED") || text.contains("quota")
    }
}

//! Generation traits - Text-generation interface

use async_trait::async_trait;

use super::config::GenerationOptions;

/// Why a generation call produced no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No API key configured; no request was sent
    MissingApiKey,
    /// The request did not complete within the configured timeout
    Timeout,
    /// Connection or transport failure
    Network(String),
    /// Non-success HTTP status from the provider
    Status { status: u16, body: String },
    /// Response body did not have the expected shape
    Malformed(String),
    /// Well-formed response whose text was blank
    EmptyResponse,
}

impl GenerationError {
    /// Short machine-friendly label, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::MissingApiKey => "missing_api_key",
            GenerationError::Timeout => "timeout",
            GenerationError::Network(_) => "network",
            GenerationError::Status { .. } => "status",
            GenerationError::Malformed(_) => "malformed",
            GenerationError::EmptyResponse => "empty_response",
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::MissingApiKey => write!(f, "Missing API key"),
            GenerationError::Timeout => write!(f, "Request timed out"),
            GenerationError::Network(msg) => write!(f, "Network error: {}", msg),
            GenerationError::Status { status, body } => {
                write!(f, "API error: status {}, body: {}", status, body)
            }
            GenerationError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
            GenerationError::EmptyResponse => write!(f, "Empty response"),
        }
    }
}

impl std::error::Error for GenerationError {}

/// Result type for generation calls
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Hosted text-generation provider
#[async_trait]
pub trait Generator: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Send one prompt and return the first candidate's text.
    ///
    /// `None` options means the provider's own defaults.
    async fn generate(
        &self,
        prompt: &str,
        options: Option<&GenerationOptions>,
    ) -> GenerationResult<String>;
}

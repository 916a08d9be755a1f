//! Application layer errors

use thiserror::Error;

use crate::infrastructure::llm::GenerationError;

/// Top-level application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Arithmetic interpretation errors. Rendered to the user as
/// `Math error: <message>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("result is out of range")]
    Overflow,

    #[error("result is undefined")]
    Domain,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

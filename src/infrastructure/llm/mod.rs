//! LLM integration - Hosted text generation

pub mod config;
pub mod providers;
pub mod traits;

#[cfg(test)]
mod tests;

pub use config::{GeminiConfig, GenerationOptions};
pub use providers::GeminiProvider;
pub use traits::{GenerationError, GenerationResult, Generator};

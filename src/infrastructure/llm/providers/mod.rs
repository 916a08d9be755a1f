//! Generation providers

pub mod gemini;

pub use gemini::GeminiProvider;

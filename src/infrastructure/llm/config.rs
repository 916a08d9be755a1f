//! Generation configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Sampling parameters sent as `generationConfig`. Unset fields are left
/// to the provider.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GenerationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl GenerationOptions {
    /// Short conversational replies.
    pub fn conversation() -> Self {
        Self {
            temperature: Some(0.6),
            max_output_tokens: Some(500),
            top_p: Some(0.7),
            top_k: Some(30),
        }
    }

    /// Long structured itinerary output.
    pub fn itinerary() -> Self {
        Self {
            temperature: Some(0.5),
            max_output_tokens: Some(3000),
            top_p: None,
            top_k: None,
        }
    }

    /// Used when a caller passes no options.
    pub fn client_default() -> Self {
        Self {
            temperature: Some(0.7),
            max_output_tokens: Some(2000),
            top_p: Some(0.8),
            top_k: Some(40),
        }
    }
}

/// Gemini endpoint configuration
#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeminiConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub chat: GenerationOptions,
    pub itinerary: GenerationOptions,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            chat: GenerationOptions::conversation(),
            itinerary: GenerationOptions::itinerary(),
        }
    }
}

impl GeminiConfig {
    /// The configured key, with a blank value treated as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("chat", &self.chat)
            .field("itinerary", &self.itinerary)
            .finish()
    }
}

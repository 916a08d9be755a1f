//! Shared request state

use std::sync::Arc;

use crate::application::errors::AppError;
use crate::application::services::{AssistantService, IntentClassifier, ItineraryService};
use crate::domain::entities::TriggerTable;
use crate::infrastructure::config::Config;
use crate::infrastructure::llm::{GeminiProvider, Generator};

/// Services shared read-only across requests.
pub struct AppState {
    pub assistant: AssistantService,
    pub itinerary: ItineraryService,
    pub default_lang: String,
}

impl AppState {
    pub fn new(assistant: AssistantService, itinerary: ItineraryService) -> Self {
        Self {
            assistant,
            itinerary,
            default_lang: "en".to_string(),
        }
    }

    pub fn with_default_lang(mut self, lang: impl Into<String>) -> Self {
        self.default_lang = lang.into();
        self
    }

    /// Wire both services to one Gemini provider built from `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let generator: Arc<dyn Generator> = Arc::new(GeminiProvider::new(&config.gemini)?);
        if config.gemini.api_key().is_none() {
            tracing::warn!("No Gemini API key configured; delegated replies will use the fallback");
        }

        let classifier = IntentClassifier::new(TriggerTable::with_defaults(&config.assistant.name));
        let assistant = AssistantService::new(classifier, Arc::clone(&generator))
            .with_chat_options(config.gemini.chat.clone());
        let itinerary =
            ItineraryService::new(generator).with_options(config.gemini.itinerary.clone());

        Ok(Self::new(assistant, itinerary).with_default_lang(&config.assistant.default_lang))
    }
}

use std::sync::Arc;

use crate::application::prompts::{assistant_prompt, build_itinerary_prompt};
use crate::domain::entities::ItineraryRequest;
use crate::infrastructure::llm::{GenerationOptions, GenerationResult, Generator};

/// Builds the itinerary prompt and sends it to the generation provider.
pub struct ItineraryService {
    generator: Arc<dyn Generator>,
    options: GenerationOptions,
}

impl ItineraryService {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self {
            generator,
            options: GenerationOptions::itinerary(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn generate(&self, request: &ItineraryRequest) -> GenerationResult<String> {
        let prompt = assistant_prompt(&build_itinerary_prompt(request), &request.lang);

        tracing::info!(
            destination = %request.destination,
            mode = %request.mode,
            "generating itinerary"
        );

        self.generator
            .generate(&prompt, Some(&self.options))
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    provider = self.generator.name(),
                    kind = e.kind(),
                    "itinerary generation failed: {}",
                    e
                )
            })
    }
}

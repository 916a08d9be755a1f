//! Application services - Business logic orchestration

pub mod assistant_service;
pub mod intent_service;
pub mod itinerary_service;

pub use assistant_service::AssistantService;
pub use intent_service::{Intent, IntentClassifier, Rule};
pub use itinerary_service::ItineraryService;

//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (Command, Trigger, MathOperation, ItineraryRequest)
//! - Traits: Abstractions for infrastructure (Clock, ReplyPicker, Speaker, Listener)

pub mod entities;
pub mod traits;

//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Intent classification, replies, itinerary generation
//! - Interpreter: Arithmetic command parsing and evaluation
//! - Prompts: Templates sent to the generation provider
//! - Errors: Domain-specific errors

pub mod errors;
pub mod interpreter;
pub mod prompts;
pub mod services;

//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - LLM: Hosted text-generation providers
//! - HTTP: axum routes and server
//! - Adapters: Console front end

pub mod adapters;
pub mod config;
pub mod http;
pub mod llm;

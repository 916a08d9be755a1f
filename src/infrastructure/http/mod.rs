//! HTTP boundary - axum routes over the application services

pub mod api;
pub mod server;
pub mod state;

pub use server::{router, WebServer};
pub use state::AppState;

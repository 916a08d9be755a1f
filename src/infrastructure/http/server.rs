//! Main web server setup and startup.

use std::path::Path;
use std::sync::Arc;

use axum::http::Method;
use axum::routing::post;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;

use crate::application::errors::AppError;
use crate::infrastructure::config::ServerConfig;
use crate::infrastructure::http::api;
use crate::infrastructure::http::state::AppState;

/// Build the router: `/` landing page, `/ask`, `/generate`.
pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route("/ask", post(api::ask))
        .route("/generate", post(api::generate))
        .layer(cors)
        .with_state(state)
}

/// The assistant's HTTP server.
pub struct WebServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl WebServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Start the server and block until it is shut down.
    pub async fn start(self) -> Result<(), AppError> {
        let addr = self.config.addr();
        let router = router(Arc::clone(&self.state), &self.config.static_dir);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!(addr = %addr, "starting web server");

        axum::serve(listener, router)
            .await
            .map_err(|e| AppError::Server(e.to_string()))
    }
}

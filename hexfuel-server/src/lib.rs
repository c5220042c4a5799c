//! HEXFUEL Server - HTTP API for the browser front end
//!
//! This crate provides the web backend:
//! - REST API for the single live game session
//! - Static file serving for the front end

mod error;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub use error::ApiError;
pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    /// Seed for board generation (None = from entropy)
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            static_dir: "hexfuel/web".to_string(),
            seed: None,
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Board geometry
        .route("/api/board", get(routes::board::get_board))
        // Game API
        .route("/api/game", get(routes::game::get_game))
        .route("/api/game/move", post(routes::game::make_player_move))
        .route("/api/game/ai-move", post(routes::game::make_ai_move))
        .route("/api/game/restart", post(routes::game::restart_game))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new(config.seed)?);
    let router = create_router(&config, state);

    tracing::info!("HEXFUEL Server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

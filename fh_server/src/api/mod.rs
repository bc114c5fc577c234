//! HTTP API for the tournament server.
//!
//! # Modules
//!
//! - [`state`]: reporting the tournament and recording scores
//! - [`request_id`]: request correlation, logging and request metrics
//!
//! # Endpoints Overview
//!
//! - `GET /state` - Round history and per-player scores
//! - `POST /state` - Record one table's score
//! - `GET /health` - Server health status
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use fh_server::api::{create_router, AppState};
//! use five_hundred::{TournamentManager, TournamentState};
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let players: Vec<String> = unimplemented!();
//! # let tables: Vec<String> = unimplemented!();
//!
//! let state = AppState {
//!     tournament: TournamentManager::new(TournamentState::new(3, players, tables)?),
//! };
//!
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively so score-entry pages can be served from
//! anywhere on the venue network.

pub mod request_id;
pub mod state;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use five_hundred::TournamentManager;
use serde_json::json;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; the manager is a cheap handle to the single
/// lock-guarded tournament.
#[derive(Clone)]
pub struct AppState {
    pub tournament: TournamentManager,
}

/// Create the complete API router with all endpoints and middleware.
///
/// ```text
/// GET  /health   - Health check
/// GET  /state    - Tournament state
/// POST /state    - Record a score
/// ```
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/state", get(state::get_state).post(state::post_score))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Health check endpoint for monitoring.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/health
/// # {"status":"healthy","version":"0.1.0","round":2,"timestamp":"2026-10-18T10:30:00Z"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "round": state.tournament.current_round_number().await,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}

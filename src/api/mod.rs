//! Moodlog REST API
//!
//! HTTP API layer for the mood engine, built with Axum.
//!
//! # Endpoints
//!
//! ## Entries
//! - `POST /api/v1/moods` - Log a mood entry
//! - `GET /api/v1/moods/:user_id` - Full log with average-mood label
//! - `PATCH /api/v1/moods/:user_id/:entry_id` - Update an entry
//! - `DELETE /api/v1/moods/:user_id/:entry_id` - Delete an entry
//!
//! ## Summaries
//! - `GET /api/v1/summary/daily?user_id&date` - One calendar day
//! - `GET /api/v1/summary/weekly?user_id` - Trailing 7 days
//!
//! ## Trend
//! - `GET /api/v1/trend?user_id` - 14-day mood trend
//!
//! ## Recommendations
//! - `POST /api/v1/recommendations` - Coping strategies for a 1-5 score
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use moodlog::api::{build_router, serve, ApiConfig, AppState};
//! use moodlog::store::StoreHandle;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(StoreHandle::new("mood_log.json"));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;

    let api_routes = Router::new()
        // Entry lifecycle routes
        .route("/moods", post(routes::entries::create_entry))
        .route("/moods/:user_id", get(routes::entries::get_mood_log))
        .route(
            "/moods/:user_id/:entry_id",
            patch(routes::entries::update_entry),
        )
        .route(
            "/moods/:user_id/:entry_id",
            delete(routes::entries::delete_entry),
        )
        // Summary routes
        .route("/summary/daily", get(routes::summary::daily_summary))
        .route("/summary/weekly", get(routes::summary::weekly_summary))
        // Trend routes
        .route("/trend", get(routes::trend::get_trend))
        // Recommendation routes
        .route(
            "/recommendations",
            post(routes::recommend::get_recommendations),
        )
        .layer(DefaultBodyLimit::max(max_body_size));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Moodlog API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Moodlog API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

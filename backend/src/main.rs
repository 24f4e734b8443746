//! VCA Paspoort - Backend Server
//!
//! Serves the employee roster with live VCA certificate status, the
//! expiry alerts feed and QR pass lookups for employers.

use axum::{routing::get, Router};
use shared::Clock;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;
mod store;

pub use crate::config::Config;
use store::RosterStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterStore>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vca_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting VCA Paspoort Server");
    tracing::info!("Environment: {}", config.environment);

    let clock = config.reporting.clock()?;
    tracing::info!(
        utc_offset_minutes = config.reporting.utc_offset_minutes,
        today = %clock.today(),
        "Reporting clock configured"
    );

    // Load the employee roster
    let roster = RosterStore::load(&config.roster.seed_path)?;
    if roster.is_empty() {
        tracing::warn!(path = %config.roster.seed_path, "Roster is empty");
    }

    // Create application state
    let state = AppState {
        roster: Arc::new(roster),
        clock: Arc::new(clock),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "VCA Paspoort API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

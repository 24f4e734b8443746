//! Route definitions for VCA Paspoort

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dashboard overview
        .route("/dashboard", get(handlers::get_dashboard))
        // Alerts feed
        .route("/alerts", get(handlers::list_alerts))
        // Employee roster
        .nest("/employees", employee_routes())
        // Ad hoc certificate classification
        .route("/certificates/classify", post(handlers::classify_certificate))
        // QR pass lookups
        .route("/scan", post(handlers::scan_pass))
}

/// Employee routes
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_employees))
        .route("/:employee_id", get(handlers::get_employee))
        .route("/:employee_id/pass", get(handlers::get_pass_share))
}

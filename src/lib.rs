//! Directorio de empresas de servicios industriales
//!
//! Backend REST sobre PostgreSQL: búsqueda de empresas, solicitudes de
//! presupuesto, reclamación de fichas con revisión admin y el login
//! legacy de empresas por access token.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Construir el router completo de la aplicación
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(routes::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "industry-directory",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

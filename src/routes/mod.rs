//! Rutas de la API
//!
//! Cada recurso tiene su router; aquí se componen bajo /api.

pub mod admin_routes;
pub mod auth_routes;
pub mod claim_routes;
pub mod company_routes;
pub mod quote_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(company_routes::create_directory_router())
                .merge(claim_routes::create_claim_router())
                .merge(quote_routes::create_quote_router())
                .merge(auth_routes::create_auth_router()),
        )
        .nest("/api/admin", admin_routes::create_admin_router())
}

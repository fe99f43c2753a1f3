//! Rutas de autenticación

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{
    AdminLoginRequest, AdminLoginResponse, CompanyLoginRequest, CompanyLoginResponse,
};
use crate::dto::claim_dto::CompanyUserResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, JwtConfig};

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/company/login", post(company_login))
        .route("/company/verify", get(company_verify))
        .route("/admin/login", post(admin_login))
}

async fn company_login(
    State(state): State<AppState>,
    Json(request): Json<CompanyLoginRequest>,
) -> Result<Json<CompanyLoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.company_login(request).await?;
    Ok(Json(response))
}

async fn company_verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CompanyUserResponse>, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = extract_token_from_header(auth_header)?;

    let controller = AuthController::new(state.pool.clone());
    let response = controller.verify_company_token(token).await?;
    Ok(Json(response))
}

async fn admin_login(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let config = JwtConfig::from(&state.config);
    let response = controller.admin_login(request, &config).await?;
    Ok(Json(response))
}

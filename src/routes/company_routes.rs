//! Rutas públicas del directorio de empresas

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::company_controller::CompanyController;
use crate::dto::company_dto::{CompanyListResponse, CompanyQueryParams};
use crate::models::company::Company;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_directory_router() -> Router<AppState> {
    Router::new()
        .route("/companies", get(search_companies))
        .route("/companies/:slug", get(get_company))
        .route("/regions", get(list_regions))
        .route("/categories", get(list_categories))
}

async fn search_companies(
    State(state): State<AppState>,
    Query(params): Query<CompanyQueryParams>,
) -> Result<Json<CompanyListResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.search(params).await?;
    Ok(Json(response))
}

async fn get_company(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Company>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let company = controller.get_by_slug(&slug).await?;
    Ok(Json(company))
}

async fn list_regions(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let regions = controller.regions().await?;
    Ok(Json(regions))
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let categories = controller.categories().await?;
    Ok(Json(categories))
}

//! Rutas de la superficie admin
//!
//! Todos los handlers exigen el extractor AdminContext: sin sesión admin
//! válida el request no llega al controller.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::claim_controller::ClaimController;
use crate::controllers::company_controller::CompanyController;
use crate::controllers::quote_controller::QuoteController;
use crate::dto::claim_dto::{
    ApproveClaimResponse, ClaimListQuery, CompanyUserResponse, RejectClaimRequest,
};
use crate::dto::company_dto::{ApiResponse, CreateCompanyRequest, UpdateCompanyRequest};
use crate::dto::quote_dto::AdminQuoteListResponse;
use crate::models::auth::AdminContext;
use crate::models::claim::ClaimRequest;
use crate::models::company::Company;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/claim-requests", get(list_claims))
        .route("/claim-requests/:id/approve", post(approve_claim))
        .route("/claim-requests/:id/reject", post(reject_claim))
        .route("/quote-requests", get(list_quotes))
        .route("/companies", post(create_company))
        .route("/companies/:id", put(update_company))
        .route("/company-users/:id/deactivate", post(deactivate_company_user))
}

async fn list_claims(
    State(state): State<AppState>,
    _admin: AdminContext,
    Query(query): Query<ClaimListQuery>,
) -> Result<Json<Vec<ClaimRequest>>, AppError> {
    let controller = ClaimController::new(state.pool.clone());
    let claims = controller.list(query.status).await?;
    Ok(Json(claims))
}

async fn approve_claim(
    State(state): State<AppState>,
    admin: AdminContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ApproveClaimResponse>>, AppError> {
    let controller = ClaimController::new(state.pool.clone());
    let response = controller.approve(id, &admin).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Reclamación aprobada; el access token solo se muestra una vez".to_string(),
    )))
}

async fn reject_claim(
    State(state): State<AppState>,
    admin: AdminContext,
    Path(id): Path<Uuid>,
    body: Option<Json<RejectClaimRequest>>,
) -> Result<Json<ApiResponse<ClaimRequest>>, AppError> {
    let notes = body.and_then(|Json(request)| request.notes);

    let controller = ClaimController::new(state.pool.clone());
    let claim = controller.reject(id, &admin, notes).await?;
    Ok(Json(ApiResponse::success(claim)))
}

async fn list_quotes(
    State(state): State<AppState>,
    _admin: AdminContext,
) -> Result<Json<AdminQuoteListResponse>, AppError> {
    let controller = QuoteController::new(state.pool.clone());
    let response = controller.admin_list().await?;
    Ok(Json(response))
}

async fn create_company(
    State(state): State<AppState>,
    _admin: AdminContext,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<Json<ApiResponse<Company>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let company = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        company,
        "Empresa creada".to_string(),
    )))
}

async fn update_company(
    State(state): State<AppState>,
    _admin: AdminContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<ApiResponse<Company>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let company = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success(company)))
}

async fn deactivate_company_user(
    State(state): State<AppState>,
    _admin: AdminContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CompanyUserResponse>>, AppError> {
    let controller = ClaimController::new(state.pool.clone());
    let user = controller.deactivate_company_user(id).await?;
    Ok(Json(ApiResponse::success(user)))
}

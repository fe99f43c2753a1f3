//! Rutas públicas de solicitudes de presupuesto

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::quote_controller::QuoteController;
use crate::dto::company_dto::ApiResponse;
use crate::dto::quote_dto::{
    QuoteSubmittedResponse, SubmitGeneralQuoteRequest, SubmitQuoteRequest,
};
use crate::models::auth::CompanyContext;
use crate::models::quote::QuoteRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_quote_router() -> Router<AppState> {
    Router::new()
        .route("/quote-requests", post(submit_quote))
        .route("/quote-requests/general", post(submit_general_quote))
        .route("/company/quote-requests", get(company_quotes))
}

async fn submit_quote(
    State(state): State<AppState>,
    Json(request): Json<SubmitQuoteRequest>,
) -> Result<Json<ApiResponse<QuoteSubmittedResponse>>, AppError> {
    let controller = QuoteController::new(state.pool.clone());
    let response = controller.submit(request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn submit_general_quote(
    State(state): State<AppState>,
    Json(request): Json<SubmitGeneralQuoteRequest>,
) -> Result<Json<ApiResponse<QuoteSubmittedResponse>>, AppError> {
    let controller = QuoteController::new(state.pool.clone());
    let response = controller.submit_general(request).await?;
    Ok(Json(ApiResponse::success(response)))
}

/// Self-service: presupuestos recibidos por la empresa autenticada
async fn company_quotes(
    State(state): State<AppState>,
    company: CompanyContext,
) -> Result<Json<Vec<QuoteRequest>>, AppError> {
    let controller = QuoteController::new(state.pool.clone());
    let quotes = controller.list_for_company(company.company_id).await?;
    Ok(Json(quotes))
}

//! Ruta pública de reclamaciones

use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::claim_controller::ClaimController;
use crate::dto::claim_dto::{ClaimSubmittedResponse, SubmitClaimRequest};
use crate::dto::company_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_claim_router() -> Router<AppState> {
    Router::new().route("/claim-requests", post(submit_claim))
}

async fn submit_claim(
    State(state): State<AppState>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<Json<ApiResponse<ClaimSubmittedResponse>>, AppError> {
    let controller = ClaimController::new(state.pool.clone());
    let response = controller.submit(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Reclamación registrada, pendiente de revisión".to_string(),
    )))
}

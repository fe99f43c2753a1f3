//! DTOs del flujo de reclamación de empresas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::claim::ClaimRequest;
use crate::models::company_user::CompanyUser;

/// Request público para reclamar una empresa
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitClaimRequest {
    #[validate(length(min = 1, max = 255))]
    pub company_slug: String,

    #[validate(length(min = 2, max = 255))]
    pub contact_name: String,

    #[validate(email)]
    pub contact_email: String,

    #[validate(length(max = 50), custom = "crate::utils::validation::validate_phone")]
    pub contact_phone: Option<String>,

    /// Justificación libre de la relación con la empresa
    #[validate(length(min = 1, max = 2000))]
    pub relationship: String,

    pub consent: bool,
}

/// Confirmación de la reclamación creada
#[derive(Debug, Serialize)]
pub struct ClaimSubmittedResponse {
    pub claim_id: Uuid,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
}

/// Query params del listado admin de reclamaciones
#[derive(Debug, Deserialize)]
pub struct ClaimListQuery {
    pub status: Option<String>,
}

/// Notas opcionales al rechazar
#[derive(Debug, Deserialize)]
pub struct RejectClaimRequest {
    pub notes: Option<String>,
}

/// CompanyUser sin el access_token
///
/// El token solo se expone en el momento de la aprobación y en el login;
/// nunca en listados ni en el objeto de usuario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyUserResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CompanyUser> for CompanyUserResponse {
    fn from(user: CompanyUser) -> Self {
        Self {
            id: user.id,
            company_id: user.company_id,
            email: user.email,
            name: user.name,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Response de aprobación: el token en claro se entrega una única vez
#[derive(Debug, Serialize)]
pub struct ApproveClaimResponse {
    pub claim: ClaimRequest,
    pub company_user: CompanyUserResponse,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_user_response_elides_token() {
        let user = CompanyUser::new(
            Uuid::new_v4(),
            "owner@example.com".to_string(),
            "Eva Lind".to_string(),
            "secret-token-value".to_string(),
            Uuid::new_v4(),
        );

        let response = CompanyUserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret-token-value"));
        assert!(json.contains("owner@example.com"));
    }
}

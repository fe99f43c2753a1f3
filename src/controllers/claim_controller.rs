//! Controller del flujo de reclamación
//!
//! Submission pública y revisión admin. La aprobación crea el
//! CompanyUser y transiciona la reclamación dentro de una única
//! transacción: nunca queda una reclamación aprobada sin credencial
//! ni una credencial sin reclamación aprobada.

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::claim_dto::{
    ApproveClaimResponse, ClaimSubmittedResponse, CompanyUserResponse, SubmitClaimRequest,
};
use crate::models::auth::AdminContext;
use crate::models::claim::{ClaimRequest, ClaimStatus};
use crate::models::company_user::CompanyUser;
use crate::repositories::claim_repository::ClaimRepository;
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::company_user_repository::CompanyUserRepository;
use crate::services::token_service;
use crate::utils::errors::{validation_error, AppError};

pub struct ClaimController {
    pool: PgPool,
    claims: ClaimRepository,
    companies: CompanyRepository,
    company_users: CompanyUserRepository,
}

impl ClaimController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            claims: ClaimRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool.clone()),
            company_users: CompanyUserRepository::new(pool.clone()),
            pool,
        }
    }

    /// Submission pública de una reclamación
    ///
    /// Duplicados permitidos: cada submission crea su propia reclamación
    /// pendiente, no se deduplica.
    pub async fn submit(
        &self,
        request: SubmitClaimRequest,
    ) -> Result<ClaimSubmittedResponse, AppError> {
        request.validate()?;

        if !request.consent {
            return Err(validation_error("consent", "Consent must be affirmed"));
        }

        let company = self
            .companies
            .find_by_slug(&request.company_slug)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Company with slug '{}' not found",
                    request.company_slug
                ))
            })?;

        let claim = ClaimRequest::new(
            company.id,
            request.contact_name,
            request.contact_email,
            request.contact_phone,
            request.relationship,
        );

        let saved = self.claims.create(&claim).await?;

        info!("Nueva reclamación {} para empresa {}", saved.id, company.slug);

        Ok(ClaimSubmittedResponse {
            claim_id: saved.id,
            status: saved.status,
            submitted_at: saved.submitted_at,
        })
    }

    /// Listado admin, opcionalmente filtrado por estado
    pub async fn list(&self, status: Option<String>) -> Result<Vec<ClaimRequest>, AppError> {
        let status = match status.as_deref() {
            None | Some("") => None,
            Some(value) => Some(ClaimStatus::from_str(value).ok_or_else(|| {
                AppError::BadRequest(format!("Invalid claim status: '{}'", value))
            })?),
        };

        self.claims.list(status).await
    }

    /// Aprobar: genera el token opaco, crea el CompanyUser y marca la
    /// reclamación como approved en una sola transacción
    pub async fn approve(
        &self,
        claim_id: Uuid,
        admin: &AdminContext,
    ) -> Result<ApproveClaimResponse, AppError> {
        let claim = self
            .claims
            .find_by_id(claim_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Claim '{}' not found", claim_id)))?;

        if !claim.is_pending() {
            return Err(AppError::Conflict(format!(
                "Claim '{}' has already been reviewed (status: {})",
                claim_id, claim.status
            )));
        }

        if self
            .company_users
            .active_exists_for_company(claim.company_id)
            .await?
        {
            return Err(AppError::Conflict(
                "Company already has an active company user".to_string(),
            ));
        }

        let access_token = self.unique_access_token().await?;

        let user = CompanyUser::new(
            claim.company_id,
            claim.contact_email.clone(),
            claim.contact_name.clone(),
            access_token.clone(),
            admin.admin_id,
        );

        let mut tx = self.pool.begin().await?;

        let created_user = self.company_users.create_tx(&mut tx, &user).await?;

        let reviewed = self
            .claims
            .mark_reviewed_tx(
                &mut tx,
                claim_id,
                ClaimStatus::Approved,
                admin.admin_id,
                Utc::now(),
                None,
            )
            .await?
            .ok_or_else(|| {
                AppError::Conflict(format!("Claim '{}' has already been reviewed", claim_id))
            })?;

        tx.commit().await?;

        info!(
            "Reclamación {} aprobada por {}; company_user {} creado",
            claim_id, admin.admin_id, created_user.id
        );

        Ok(ApproveClaimResponse {
            claim: reviewed,
            company_user: CompanyUserResponse::from(created_user),
            access_token,
        })
    }

    /// Rechazar: transición terminal sin efectos secundarios
    pub async fn reject(
        &self,
        claim_id: Uuid,
        admin: &AdminContext,
        notes: Option<String>,
    ) -> Result<ClaimRequest, AppError> {
        let claim = self
            .claims
            .find_by_id(claim_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Claim '{}' not found", claim_id)))?;

        if !claim.is_pending() {
            return Err(AppError::Conflict(format!(
                "Claim '{}' has already been reviewed (status: {})",
                claim_id, claim.status
            )));
        }

        let rejected = self
            .claims
            .mark_reviewed(claim_id, ClaimStatus::Rejected, admin.admin_id, Utc::now(), notes)
            .await?
            .ok_or_else(|| {
                AppError::Conflict(format!("Claim '{}' has already been reviewed", claim_id))
            })?;

        info!("Reclamación {} rechazada por {}", claim_id, admin.admin_id);

        Ok(rejected)
    }

    /// Desactivar un usuario de empresa (única mutación permitida)
    pub async fn deactivate_company_user(
        &self,
        user_id: Uuid,
    ) -> Result<CompanyUserResponse, AppError> {
        let user = self
            .company_users
            .deactivate(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("CompanyUser '{}' not found", user_id)))?;

        Ok(CompanyUserResponse::from(user))
    }

    /// Generar un token que no colisione con los existentes
    ///
    /// El índice UNIQUE de la tabla es el backstop; la probabilidad de
    /// agotar los reintentos con tokens de 48 caracteres es despreciable.
    async fn unique_access_token(&self) -> Result<String, AppError> {
        for _ in 0..5 {
            let token = token_service::generate_access_token();
            if !self.company_users.token_exists(&token).await? {
                return Ok(token);
            }
        }

        Err(AppError::Internal(
            "Could not generate a unique access token".to_string(),
        ))
    }
}

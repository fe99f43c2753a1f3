//! Repositorio de reclamaciones
//!
//! La transición de estado se hace con un UPDATE condicionado a
//! status = 'pending': una reclamación ya revisada no puede volver a
//! transicionar aunque dos admins revisen a la vez.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::claim::{ClaimRequest, ClaimStatus};
use crate::utils::errors::AppError;

pub struct ClaimRepository {
    pool: PgPool,
}

impl ClaimRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, claim: &ClaimRequest) -> Result<ClaimRequest, AppError> {
        let result = sqlx::query_as::<_, ClaimRequest>(
            r#"
            INSERT INTO claim_requests (
                id, company_id, contact_name, contact_email, contact_phone,
                relationship, consent, status, submitted_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(claim.id)
        .bind(claim.company_id)
        .bind(&claim.contact_name)
        .bind(&claim.contact_email)
        .bind(&claim.contact_phone)
        .bind(&claim.relationship)
        .bind(claim.consent)
        .bind(&claim.status)
        .bind(claim.submitted_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ClaimRequest>, AppError> {
        let result = sqlx::query_as::<_, ClaimRequest>("SELECT * FROM claim_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn list(&self, status: Option<ClaimStatus>) -> Result<Vec<ClaimRequest>, AppError> {
        let result = match status {
            Some(status) => {
                sqlx::query_as::<_, ClaimRequest>(
                    "SELECT * FROM claim_requests WHERE status = $1 ORDER BY submitted_at DESC",
                )
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ClaimRequest>(
                    "SELECT * FROM claim_requests ORDER BY submitted_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(result)
    }

    /// Transición pending → estado terminal dentro de una transacción
    ///
    /// Devuelve None si la reclamación ya no estaba pending.
    pub async fn mark_reviewed_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        status: ClaimStatus,
        reviewed_by: Uuid,
        reviewed_at: DateTime<Utc>,
        review_notes: Option<String>,
    ) -> Result<Option<ClaimRequest>, AppError> {
        let result = sqlx::query_as::<_, ClaimRequest>(
            r#"
            UPDATE claim_requests
            SET status = $2, reviewed_by = $3, reviewed_at = $4, review_notes = $5
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .bind(reviewed_by)
        .bind(reviewed_at)
        .bind(review_notes)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(result)
    }

    /// Variante sin transacción para el rechazo (un solo UPDATE)
    pub async fn mark_reviewed(
        &self,
        id: Uuid,
        status: ClaimStatus,
        reviewed_by: Uuid,
        reviewed_at: DateTime<Utc>,
        review_notes: Option<String>,
    ) -> Result<Option<ClaimRequest>, AppError> {
        let result = sqlx::query_as::<_, ClaimRequest>(
            r#"
            UPDATE claim_requests
            SET status = $2, reviewed_by = $3, reviewed_at = $4, review_notes = $5
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .bind(reviewed_by)
        .bind(reviewed_at)
        .bind(review_notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }
}

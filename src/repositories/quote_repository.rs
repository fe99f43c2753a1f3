//! Repositorio de solicitudes de presupuesto
//!
//! Solo inserts y listados: los registros son write-once.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::quote::{GeneralQuoteRequest, QuoteRequest};
use crate::utils::errors::AppError;

pub struct QuoteRepository {
    pool: PgPool,
}

impl QuoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, quote: &QuoteRequest) -> Result<QuoteRequest, AppError> {
        let result = sqlx::query_as::<_, QuoteRequest>(
            r#"
            INSERT INTO quote_requests (
                id, company_id, name, email, phone, service_description,
                urgency, preferred_contact, attachments, submitted_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(quote.id)
        .bind(quote.company_id)
        .bind(&quote.name)
        .bind(&quote.email)
        .bind(&quote.phone)
        .bind(&quote.service_description)
        .bind(&quote.urgency)
        .bind(&quote.preferred_contact)
        .bind(&quote.attachments)
        .bind(quote.submitted_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn create_general(
        &self,
        quote: &GeneralQuoteRequest,
    ) -> Result<GeneralQuoteRequest, AppError> {
        let result = sqlx::query_as::<_, GeneralQuoteRequest>(
            r#"
            INSERT INTO general_quote_requests (
                id, name, email, phone, service_description, service_area,
                urgency, preferred_contact, attachments, submitted_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(quote.id)
        .bind(&quote.name)
        .bind(&quote.email)
        .bind(&quote.phone)
        .bind(&quote.service_description)
        .bind(&quote.service_area)
        .bind(&quote.urgency)
        .bind(&quote.preferred_contact)
        .bind(&quote.attachments)
        .bind(quote.submitted_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<QuoteRequest>, AppError> {
        let result = sqlx::query_as::<_, QuoteRequest>(
            "SELECT * FROM quote_requests ORDER BY submitted_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn list_for_company(&self, company_id: Uuid) -> Result<Vec<QuoteRequest>, AppError> {
        let result = sqlx::query_as::<_, QuoteRequest>(
            "SELECT * FROM quote_requests WHERE company_id = $1 ORDER BY submitted_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn list_general(&self) -> Result<Vec<GeneralQuoteRequest>, AppError> {
        let result = sqlx::query_as::<_, GeneralQuoteRequest>(
            "SELECT * FROM general_quote_requests ORDER BY submitted_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }
}

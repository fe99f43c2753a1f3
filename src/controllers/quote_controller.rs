//! Controller de solicitudes de presupuesto
//!
//! Inserts write-once; el seguimiento es manual desde la superficie admin.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::quote_dto::{
    AdminQuoteListResponse, QuoteSubmittedResponse, SubmitGeneralQuoteRequest, SubmitQuoteRequest,
};
use crate::models::quote::{GeneralQuoteRequest, PreferredContact, QuoteRequest, Urgency};
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::quote_repository::QuoteRepository;
use crate::utils::errors::AppError;

pub struct QuoteController {
    quotes: QuoteRepository,
    companies: CompanyRepository,
}

impl QuoteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            quotes: QuoteRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool),
        }
    }

    pub async fn submit(
        &self,
        request: SubmitQuoteRequest,
    ) -> Result<QuoteSubmittedResponse, AppError> {
        request.validate()?;

        let urgency = parse_urgency(request.urgency.as_deref())?;
        let preferred_contact = parse_preferred_contact(request.preferred_contact.as_deref())?;

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

        let quote = QuoteRequest::new(
            company.id,
            request.name,
            request.email,
            request.phone,
            request.service_description,
            urgency,
            preferred_contact,
            request.attachments.unwrap_or_default(),
        );

        let saved = self.quotes.create(&quote).await?;

        Ok(QuoteSubmittedResponse {
            quote_id: saved.id,
            submitted_at: saved.submitted_at,
        })
    }

    pub async fn submit_general(
        &self,
        request: SubmitGeneralQuoteRequest,
    ) -> Result<QuoteSubmittedResponse, AppError> {
        request.validate()?;

        let urgency = parse_urgency(request.urgency.as_deref())?;
        let preferred_contact = parse_preferred_contact(request.preferred_contact.as_deref())?;

        let quote = GeneralQuoteRequest::new(
            request.name,
            request.email,
            request.phone,
            request.service_description,
            request.service_area,
            urgency,
            preferred_contact,
            request.attachments.unwrap_or_default(),
        );

        let saved = self.quotes.create_general(&quote).await?;

        Ok(QuoteSubmittedResponse {
            quote_id: saved.id,
            submitted_at: saved.submitted_at,
        })
    }

    /// Presupuestos dirigidos a la empresa del usuario autenticado
    pub async fn list_for_company(
        &self,
        company_id: uuid::Uuid,
    ) -> Result<Vec<QuoteRequest>, AppError> {
        self.quotes.list_for_company(company_id).await
    }

    /// Listado combinado para la superficie admin
    pub async fn admin_list(&self) -> Result<AdminQuoteListResponse, AppError> {
        let quote_requests = self.quotes.list_all().await?;
        let general_quote_requests = self.quotes.list_general().await?;

        Ok(AdminQuoteListResponse {
            quote_requests,
            general_quote_requests,
        })
    }
}

fn parse_urgency(value: Option<&str>) -> Result<Urgency, AppError> {
    match value {
        None | Some("") => Ok(Urgency::Normal),
        Some(value) => Urgency::from_str(value)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid urgency: '{}'", value))),
    }
}

fn parse_preferred_contact(value: Option<&str>) -> Result<PreferredContact, AppError> {
    match value {
        None | Some("") => Ok(PreferredContact::Email),
        Some(value) => PreferredContact::from_str(value)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid preferred contact: '{}'", value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_urgency_defaults_to_normal() {
        assert_eq!(parse_urgency(None).unwrap(), Urgency::Normal);
        assert_eq!(parse_urgency(Some("")).unwrap(), Urgency::Normal);
        assert_eq!(parse_urgency(Some("urgent")).unwrap(), Urgency::Urgent);
        assert!(parse_urgency(Some("whenever")).is_err());
    }

    #[test]
    fn test_parse_preferred_contact_defaults_to_email() {
        assert_eq!(parse_preferred_contact(None).unwrap(), PreferredContact::Email);
        assert_eq!(parse_preferred_contact(Some("phone")).unwrap(), PreferredContact::Phone);
        assert!(parse_preferred_contact(Some("fax")).is_err());
    }
}

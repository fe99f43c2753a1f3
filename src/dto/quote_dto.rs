//! DTOs de solicitudes de presupuesto

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::quote::{GeneralQuoteRequest, QuoteRequest};

/// Request público de presupuesto dirigido a una empresa
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitQuoteRequest {
    #[validate(length(min = 1, max = 255))]
    pub company_slug: String,

    #[validate(length(min = 2, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 50), custom = "crate::utils::validation::validate_phone")]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub service_description: String,

    /// low | normal | high | urgent (default normal)
    pub urgency: Option<String>,

    /// email | phone (default email)
    pub preferred_contact: Option<String>,

    /// Referencias a ficheros ya subidos por el cliente
    pub attachments: Option<Vec<String>>,
}

/// Request público de presupuesto general (sin empresa destino)
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitGeneralQuoteRequest {
    #[validate(length(min = 2, max = 255))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 50), custom = "crate::utils::validation::validate_phone")]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub service_description: String,

    #[validate(length(max = 100))]
    pub service_area: Option<String>,

    pub urgency: Option<String>,
    pub preferred_contact: Option<String>,
    pub attachments: Option<Vec<String>>,
}

/// Confirmación del presupuesto creado
#[derive(Debug, Serialize)]
pub struct QuoteSubmittedResponse {
    pub quote_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

/// Listado combinado para la superficie admin de seguimiento manual
#[derive(Debug, Serialize)]
pub struct AdminQuoteListResponse {
    pub quote_requests: Vec<QuoteRequest>,
    pub general_quote_requests: Vec<GeneralQuoteRequest>,
}

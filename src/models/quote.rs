//! Modelos de solicitudes de presupuesto
//!
//! Registros write-once para seguimiento manual: no tienen campo de
//! estado y nunca se mutan después del insert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Urgencia declarada por el solicitante
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Normal,
    High,
    Urgent,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Urgency::Low),
            "normal" => Some(Urgency::Normal),
            "high" => Some(Urgency::High),
            "urgent" => Some(Urgency::Urgent),
            _ => None,
        }
    }
}

/// Método de contacto preferido
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferredContact {
    Email,
    Phone,
}

impl PreferredContact {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredContact::Email => "email",
            PreferredContact::Phone => "phone",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "email" => Some(PreferredContact::Email),
            "phone" => Some(PreferredContact::Phone),
            _ => None,
        }
    }
}

/// QuoteRequest ligado a una empresa - mapea a la tabla quote_requests
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuoteRequest {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_description: String,
    pub urgency: String,
    pub preferred_contact: String,
    pub attachments: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl QuoteRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company_id: Uuid,
        name: String,
        email: String,
        phone: Option<String>,
        service_description: String,
        urgency: Urgency,
        preferred_contact: PreferredContact,
        attachments: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            name,
            email,
            phone,
            service_description,
            urgency: urgency.as_str().to_string(),
            preferred_contact: preferred_contact.as_str().to_string(),
            attachments,
            submitted_at: Utc::now(),
        }
    }
}

/// GeneralQuoteRequest sin empresa destino - mapea a general_quote_requests
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneralQuoteRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_description: String,
    pub service_area: Option<String>,
    pub urgency: String,
    pub preferred_contact: String,
    pub attachments: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl GeneralQuoteRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        service_description: String,
        service_area: Option<String>,
        urgency: Urgency,
        preferred_contact: PreferredContact,
        attachments: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            service_description,
            service_area,
            urgency: urgency.as_str().to_string(),
            preferred_contact: preferred_contact.as_str().to_string(),
            attachments,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_roundtrip() {
        for urgency in [Urgency::Low, Urgency::Normal, Urgency::High, Urgency::Urgent] {
            assert_eq!(Urgency::from_str(urgency.as_str()), Some(urgency));
        }
        assert_eq!(Urgency::from_str("asap"), None);
    }

    #[test]
    fn test_preferred_contact_roundtrip() {
        assert_eq!(PreferredContact::from_str("email"), Some(PreferredContact::Email));
        assert_eq!(PreferredContact::from_str("phone"), Some(PreferredContact::Phone));
        assert_eq!(PreferredContact::from_str("fax"), None);
    }
}

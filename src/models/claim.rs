//! Modelo de ClaimRequest
//!
//! Una solicitud de reclamación de empresa: un tercero afirma representar
//! a una empresa listada y la solicitud queda pendiente de revisión admin.
//! Estados: pending → approved | rejected, ambos terminales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una solicitud de reclamación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ClaimStatus::Pending),
            "approved" => Some(ClaimStatus::Approved),
            "rejected" => Some(ClaimStatus::Rejected),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }
}

/// ClaimRequest - mapea exactamente a la tabla claim_requests
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClaimRequest {
    pub id: Uuid,
    pub company_id: Uuid,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub relationship: String,
    pub consent: bool,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<Uuid>,
    pub review_notes: Option<String>,
}

impl ClaimRequest {
    pub fn new(
        company_id: Uuid,
        contact_name: String,
        contact_email: String,
        contact_phone: Option<String>,
        relationship: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            contact_name,
            contact_email,
            contact_phone,
            relationship,
            consent: true,
            status: ClaimStatus::Pending.as_str().to_string(),
            submitted_at: Utc::now(),
            reviewed_at: None,
            reviewed_by: None,
            review_notes: None,
        }
    }

    pub fn status(&self) -> Option<ClaimStatus> {
        ClaimStatus::from_str(&self.status)
    }

    pub fn is_pending(&self) -> bool {
        self.status() == Some(ClaimStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claim_is_pending() {
        let claim = ClaimRequest::new(
            Uuid::new_v4(),
            "Eva Lind".to_string(),
            "owner@example.com".to_string(),
            None,
            "I am the owner".to_string(),
        );

        assert!(claim.is_pending());
        assert!(claim.reviewed_at.is_none());
        assert!(claim.reviewed_by.is_none());
        assert!(claim.submitted_at <= Utc::now());
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Rejected] {
            assert_eq!(ClaimStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ClaimStatus::from_str("archived"), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ClaimStatus::Pending.is_terminal());
        assert!(ClaimStatus::Approved.is_terminal());
        assert!(ClaimStatus::Rejected.is_terminal());
    }
}

//! Modelo de CompanyUser
//!
//! Un CompanyUser se crea únicamente como efecto de aprobar una
//! reclamación. Su access_token opaco es la única credencial del login
//! legacy de empresas; después de creado solo se permite desactivarlo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// CompanyUser - mapea exactamente a la tabla company_users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyUser {
    pub id: Uuid,
    pub company_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub access_token: String,
    pub is_active: bool,
    pub approved_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl CompanyUser {
    pub fn new(
        company_id: Uuid,
        email: String,
        name: String,
        access_token: String,
        approved_by: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            email,
            name,
            role: "owner".to_string(),
            access_token,
            is_active: true,
            approved_by,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_company_user_is_active_owner() {
        let user = CompanyUser::new(
            Uuid::new_v4(),
            "owner@example.com".to_string(),
            "Eva Lind".to_string(),
            "token-abc".to_string(),
            Uuid::new_v4(),
        );

        assert!(user.is_active);
        assert_eq!(user.role, "owner");
    }
}

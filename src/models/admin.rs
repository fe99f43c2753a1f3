//! Modelo de AdminUser
//!
//! Cuenta de administrador para el path legacy de username/password.
//! El path actual (proveedor de identidad externo) no crea filas aquí:
//! el rol llega en los claims del token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// AdminUser - mapea exactamente a la tabla admin_users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_super_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    pub fn new(username: String, password_hash: String, is_super_admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            is_super_admin,
            created_at: Utc::now(),
        }
    }
}

//! Modelo del principal autenticado
//!
//! El rol se resuelve una sola vez en el boundary (token verificado →
//! claim de rol → enum interno) y los handlers reciben el contexto como
//! argumento explícito, nunca como estado global.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthRole {
    Admin,
    SuperAdmin,
    Company,
    Anonymous,
}

impl AuthRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthRole::Admin => "admin",
            AuthRole::SuperAdmin => "super_admin",
            AuthRole::Company => "company",
            AuthRole::Anonymous => "anonymous",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(AuthRole::Admin),
            "super_admin" => Some(AuthRole::SuperAdmin),
            "company" => Some(AuthRole::Company),
            "anonymous" => Some(AuthRole::Anonymous),
            _ => None,
        }
    }

    /// Si el rol da acceso a la superficie de administración
    pub fn is_admin(&self) -> bool {
        matches!(self, AuthRole::Admin | AuthRole::SuperAdmin)
    }
}

/// Contexto de un administrador autenticado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminContext {
    pub admin_id: Uuid,
    pub username: Option<String>,
    pub is_super_admin: bool,
}

/// Contexto de un usuario de empresa autenticado (login legacy por token)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyContext {
    pub company_user_id: Uuid,
    pub company_id: Uuid,
    pub email: String,
}

/// Principal autenticado de un request
#[derive(Debug, Clone)]
pub enum Principal {
    Admin(AdminContext),
    Company(CompanyContext),
    Anonymous,
}

impl Principal {
    pub fn role(&self) -> AuthRole {
        match self {
            Principal::Admin(ctx) if ctx.is_super_admin => AuthRole::SuperAdmin,
            Principal::Admin(_) => AuthRole::Admin,
            Principal::Company(_) => AuthRole::Company,
            Principal::Anonymous => AuthRole::Anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [AuthRole::Admin, AuthRole::SuperAdmin, AuthRole::Company] {
            assert_eq!(AuthRole::from_str(role.as_str()), Some(role));
        }
        assert_eq!(AuthRole::from_str("livreur"), None);
    }

    #[test]
    fn test_is_admin() {
        assert!(AuthRole::Admin.is_admin());
        assert!(AuthRole::SuperAdmin.is_admin());
        assert!(!AuthRole::Company.is_admin());
        assert!(!AuthRole::Anonymous.is_admin());
    }

    #[test]
    fn test_principal_role() {
        let principal = Principal::Admin(AdminContext {
            admin_id: Uuid::new_v4(),
            username: Some("admin".to_string()),
            is_super_admin: true,
        });
        assert_eq!(principal.role(), AuthRole::SuperAdmin);
        assert!(matches!(Principal::Anonymous.role(), AuthRole::Anonymous));
    }
}

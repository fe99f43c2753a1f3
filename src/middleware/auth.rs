//! Extractores de autenticación
//!
//! El principal autenticado se resuelve una sola vez aquí, en el
//! boundary del request, y los handlers lo reciben como argumento.
//! No hay estado de sesión global.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::models::auth::{AdminContext, AuthRole, CompanyContext};
use crate::repositories::company_user_repository::CompanyUserRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, resolve_role, verify_token, JwtConfig};

/// Sacar el bearer token del header Authorization
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    extract_token_from_header(header)
}

/// Extractor de sesión admin
///
/// Acepta tanto los JWT emitidos por el login legacy como los del
/// proveedor de identidad externo (rol en app_metadata). Cualquier otro
/// rol es Forbidden.
#[axum::async_trait]
impl FromRequestParts<AppState> for AdminContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let config = JwtConfig::from(&state.config);
        let claims = verify_token(token, &config)?;

        let role = resolve_role(&claims);
        if !role.is_admin() {
            return Err(AppError::Forbidden(
                "Administrator role required".to_string(),
            ));
        }

        let admin_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AdminContext {
            admin_id,
            username: claims.username,
            is_super_admin: role == AuthRole::SuperAdmin,
        })
    }
}

/// Extractor de sesión de empresa (path legacy por access token)
///
/// El token opaco se verifica contra la base en cada request.
#[axum::async_trait]
impl FromRequestParts<AppState> for CompanyContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let repository = CompanyUserRepository::new(state.pool.clone());
        let user = repository
            .find_by_token(token)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        Ok(CompanyContext {
            company_user_id: user.id,
            company_id: user.company_id,
            email: user.email,
        })
    }
}

//! Controller de autenticación
//!
//! Login legacy de empresa por access token opaco y login legacy de
//! admin por username/password con JWT de sesión. Todos los fallos de
//! credenciales devuelven el mismo error genérico: la respuesta no
//! revela qué factor falló.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::dto::auth_dto::{
    AdminLoginRequest, AdminLoginResponse, CompanyLoginRequest, CompanyLoginResponse,
};
use crate::dto::claim_dto::CompanyUserResponse;
use crate::models::admin::AdminUser;
use crate::models::auth::AuthRole;
use crate::repositories::admin_repository::AdminRepository;
use crate::repositories::company_user_repository::CompanyUserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_admin_token, JwtConfig};

const INVALID_CREDENTIALS: &str = "Credenciales inválidas";

pub struct AuthController {
    admins: AdminRepository,
    company_users: CompanyUserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            admins: AdminRepository::new(pool.clone()),
            company_users: CompanyUserRepository::new(pool),
        }
    }

    /// Login legacy de empresa: email + access token
    pub async fn company_login(
        &self,
        request: CompanyLoginRequest,
    ) -> Result<CompanyLoginResponse, AppError> {
        let user = self
            .company_users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !user.is_active || user.access_token != request.access_token {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        info!("Login de empresa correcto para company {}", user.company_id);

        let token = user.access_token.clone();
        Ok(CompanyLoginResponse::success(
            CompanyUserResponse::from(user),
            token,
        ))
    }

    /// Verificar el bearer token del path legacy de empresa
    pub async fn verify_company_token(
        &self,
        access_token: &str,
    ) -> Result<CompanyUserResponse, AppError> {
        let user = self
            .company_users
            .find_by_token(access_token)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        Ok(CompanyUserResponse::from(user))
    }

    /// Login legacy de administrador: username/password → JWT
    pub async fn admin_login(
        &self,
        request: AdminLoginRequest,
        config: &JwtConfig,
    ) -> Result<AdminLoginResponse, AppError> {
        let admin = self
            .admins
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        let valid = verify(&request.password, &admin.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            warn!("Password incorrecto para admin '{}'", request.username);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let role = if admin.is_super_admin {
            AuthRole::SuperAdmin
        } else {
            AuthRole::Admin
        };

        let token = generate_admin_token(admin.id, &admin.username, role, config)?;
        let expires_at = chrono::Utc::now() + chrono::Duration::seconds(config.expiration as i64);

        info!("Login admin correcto para '{}'", admin.username);

        Ok(AdminLoginResponse::success(token, expires_at))
    }

    /// Crear el admin inicial desde el entorno si no existe todavía
    ///
    /// Se invoca en el arranque; sin ADMIN_USERNAME/ADMIN_PASSWORD no
    /// hace nada.
    pub async fn ensure_bootstrap_admin(&self) -> Result<(), AppError> {
        let (username, password) = match (
            std::env::var("ADMIN_USERNAME"),
            std::env::var("ADMIN_PASSWORD"),
        ) {
            (Ok(username), Ok(password)) if !username.is_empty() && !password.is_empty() => {
                (username, password)
            }
            _ => return Ok(()),
        };

        if self.admins.username_exists(&username).await? {
            return Ok(());
        }

        let password_hash = hash(&password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let admin = AdminUser::new(username.clone(), password_hash, true);
        self.admins.create(&admin).await?;

        info!("Admin inicial '{}' creado desde el entorno", username);

        Ok(())
    }
}

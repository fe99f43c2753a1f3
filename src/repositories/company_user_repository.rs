//! Repositorio de usuarios de empresa
//!
//! El insert vive dentro de la transacción de aprobación: el usuario y la
//! transición de la reclamación se confirman juntos o no se confirman.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::company_user::CompanyUser;
use crate::utils::errors::AppError;

pub struct CompanyUserRepository {
    pool: PgPool,
}

impl CompanyUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &CompanyUser,
    ) -> Result<CompanyUser, AppError> {
        let result = sqlx::query_as::<_, CompanyUser>(
            r#"
            INSERT INTO company_users (
                id, company_id, email, name, role, access_token,
                is_active, approved_by, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(user.company_id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.role)
        .bind(&user.access_token)
        .bind(user.is_active)
        .bind(user.approved_by)
        .bind(user.created_at)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::Conflict(format!(
                        "CompanyUser with email '{}' already exists",
                        user.email
                    ));
                }
            }
            AppError::Database(e)
        })?;

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<CompanyUser>, AppError> {
        let result =
            sqlx::query_as::<_, CompanyUser>("SELECT * FROM company_users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(result)
    }

    pub async fn find_by_token(&self, access_token: &str) -> Result<Option<CompanyUser>, AppError> {
        let result =
            sqlx::query_as::<_, CompanyUser>("SELECT * FROM company_users WHERE access_token = $1")
                .bind(access_token)
                .fetch_optional(&self.pool)
                .await?;

        Ok(result)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM company_users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn token_exists(&self, access_token: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM company_users WHERE access_token = $1)")
                .bind(access_token)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Una empresa reclamada tiene como máximo un usuario activo
    pub async fn active_exists_for_company(&self, company_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM company_users WHERE company_id = $1 AND is_active = true)",
        )
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Desactivación: la única mutación permitida después de la creación
    pub async fn deactivate(&self, id: Uuid) -> Result<Option<CompanyUser>, AppError> {
        let result = sqlx::query_as::<_, CompanyUser>(
            "UPDATE company_users SET is_active = false WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }
}

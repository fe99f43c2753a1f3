//! Repositorio de administradores (path legacy username/password)

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::admin::AdminUser;
use crate::utils::errors::AppError;

pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, admin: &AdminUser) -> Result<AdminUser, AppError> {
        let result = sqlx::query_as::<_, AdminUser>(
            r#"
            INSERT INTO admin_users (id, username, password_hash, is_super_admin, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(admin.id)
        .bind(&admin.username)
        .bind(&admin.password_hash)
        .bind(admin.is_super_admin)
        .bind(admin.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::Conflict(format!(
                        "AdminUser with username '{}' already exists",
                        admin.username
                    ));
                }
            }
            AppError::Database(e)
        })?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminUser>, AppError> {
        let result = sqlx::query_as::<_, AdminUser>("SELECT * FROM admin_users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>, AppError> {
        let result =
            sqlx::query_as::<_, AdminUser>("SELECT * FROM admin_users WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;

        Ok(result)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM admin_users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}

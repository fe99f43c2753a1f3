//! Repositorio de empresas
//!
//! Queries de la tabla companies: CRUD admin, búsqueda filtrada y las
//! listas de valores distintos para los filtros del frontend.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::company::{Company, CompanySearchFilters};
use crate::utils::errors::AppError;

pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, company: &Company) -> Result<Company, AppError> {
        let result = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (
                id, slug, name, description_sv, description_en, categories,
                service_areas, specialties, address, postal_code, city, region,
                email, phone, website, is_featured, is_verified, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING *
            "#,
        )
        .bind(company.id)
        .bind(&company.slug)
        .bind(&company.name)
        .bind(&company.description_sv)
        .bind(&company.description_en)
        .bind(&company.categories)
        .bind(&company.service_areas)
        .bind(&company.specialties)
        .bind(&company.address)
        .bind(&company.postal_code)
        .bind(&company.city)
        .bind(&company.region)
        .bind(&company.email)
        .bind(&company.phone)
        .bind(&company.website)
        .bind(company.is_featured)
        .bind(company.is_verified)
        .bind(company.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::Conflict(format!(
                        "Company with slug '{}' already exists",
                        company.slug
                    ));
                }
            }
            AppError::Database(e)
        })?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        let result = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Company>, AppError> {
        let result = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM companies WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Búsqueda filtrada con total para paginación
    ///
    /// Sin sort explícito no se garantiza ningún orden: el "relevance"
    /// del frontend es una etiqueta, no un scoring.
    pub async fn search(
        &self,
        filters: &CompanySearchFilters,
    ) -> Result<(Vec<Company>, i64), AppError> {
        let total: i64 = {
            let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM companies");
            push_filters(&mut builder, filters);
            builder
                .build_query_as::<(i64,)>()
                .fetch_one(&self.pool)
                .await?
                .0
        };

        let companies = {
            let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM companies");
            push_filters(&mut builder, filters);

            if let Some(sort) = filters.sort {
                builder.push(sort.order_by_clause());
            }

            builder.push(" LIMIT ");
            builder.push_bind(filters.limit);
            builder.push(" OFFSET ");
            builder.push_bind(filters.offset);

            builder
                .build_query_as::<Company>()
                .fetch_all(&self.pool)
                .await?
        };

        Ok((companies, total))
    }

    /// Actualizar todos los campos mutables; el slug nunca se toca
    pub async fn update(&self, company: &Company) -> Result<Company, AppError> {
        let result = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = $2, description_sv = $3, description_en = $4, categories = $5,
                service_areas = $6, specialties = $7, address = $8, postal_code = $9,
                city = $10, region = $11, email = $12, phone = $13, website = $14,
                is_featured = $15, is_verified = $16
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(company.id)
        .bind(&company.name)
        .bind(&company.description_sv)
        .bind(&company.description_en)
        .bind(&company.categories)
        .bind(&company.service_areas)
        .bind(&company.specialties)
        .bind(&company.address)
        .bind(&company.postal_code)
        .bind(&company.city)
        .bind(&company.region)
        .bind(&company.email)
        .bind(&company.phone)
        .bind(&company.website)
        .bind(company.is_featured)
        .bind(company.is_verified)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn distinct_regions(&self) -> Result<Vec<String>, AppError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT region FROM companies WHERE region IS NOT NULL ORDER BY region ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }

    pub async fn distinct_categories(&self) -> Result<Vec<String>, AppError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT unnest(categories) AS category FROM companies ORDER BY category ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }
}

/// Aplicar los filtros comunes al listado y al COUNT
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &CompanySearchFilters) {
    builder.push(" WHERE 1=1");

    if let Some(search) = &filters.search {
        let pattern = format!("%{}%", search);
        builder.push(" AND (name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description_sv ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description_en ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }

    if let Some(region) = &filters.region {
        builder.push(" AND region = ");
        builder.push_bind(region.clone());
    }

    if !filters.categories.is_empty() {
        builder.push(" AND categories @> ");
        builder.push_bind(filters.categories.clone());
    }
}

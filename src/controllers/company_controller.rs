//! Controller de empresas
//!
//! Búsqueda pública, perfil por slug, listas de filtros y las mutaciones
//! de la superficie admin.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::company_dto::{
    CompanyListResponse, CompanyQueryParams, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::models::company::{Company, CompanySearchFilters, CompanySort, NewCompany};
use crate::repositories::company_repository::CompanyRepository;
use crate::services::slug_service;
use crate::utils::errors::AppError;

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

pub struct CompanyController {
    repository: CompanyRepository,
}

impl CompanyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
        }
    }

    pub async fn search(&self, params: CompanyQueryParams) -> Result<CompanyListResponse, AppError> {
        let filters = parse_filters(params)?;
        let (companies, total) = self.repository.search(&filters).await?;

        Ok(CompanyListResponse {
            companies,
            total,
            limit: filters.limit,
            offset: filters.offset,
        })
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Company, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company with slug '{}' not found", slug)))
    }

    pub async fn regions(&self) -> Result<Vec<String>, AppError> {
        self.repository.distinct_regions().await
    }

    pub async fn categories(&self) -> Result<Vec<String>, AppError> {
        self.repository.distinct_categories().await
    }

    /// Crear empresa (solo admin): el slug se deriva del nombre aquí y
    /// nunca vuelve a cambiar
    pub async fn create(&self, request: CreateCompanyRequest) -> Result<Company, AppError> {
        request.validate()?;

        let base = slug_service::slugify(&request.name);
        if base.is_empty() {
            return Err(AppError::BadRequest(
                "El nombre de la empresa no produce un slug válido".to_string(),
            ));
        }

        let mut slug = base.clone();
        for attempt in 2..=100u32 {
            if !self.repository.slug_exists(&slug).await? {
                break;
            }
            slug = slug_service::slug_candidate(&base, attempt);
        }

        let company = Company::new(
            slug,
            NewCompany {
                name: request.name,
                description_sv: request.description_sv,
                description_en: request.description_en,
                categories: request.categories.unwrap_or_default(),
                service_areas: request.service_areas.unwrap_or_default(),
                specialties: request.specialties.unwrap_or_default(),
                address: request.address,
                postal_code: request.postal_code,
                city: request.city,
                region: request.region,
                email: request.email,
                phone: request.phone,
                website: request.website,
                is_featured: request.is_featured.unwrap_or(false),
                is_verified: request.is_verified.unwrap_or(false),
            },
        );

        self.repository.create(&company).await
    }

    /// Actualización parcial (solo admin); el slug es inmutable
    pub async fn update(&self, id: Uuid, request: UpdateCompanyRequest) -> Result<Company, AppError> {
        request.validate()?;

        let mut company = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company with id '{}' not found", id)))?;

        if let Some(name) = request.name {
            company.name = name;
        }
        if let Some(description_sv) = request.description_sv {
            company.description_sv = Some(description_sv);
        }
        if let Some(description_en) = request.description_en {
            company.description_en = Some(description_en);
        }
        if let Some(categories) = request.categories {
            company.categories = categories;
        }
        if let Some(service_areas) = request.service_areas {
            company.service_areas = service_areas;
        }
        if let Some(specialties) = request.specialties {
            company.specialties = specialties;
        }
        if let Some(address) = request.address {
            company.address = Some(address);
        }
        if let Some(postal_code) = request.postal_code {
            company.postal_code = Some(postal_code);
        }
        if let Some(city) = request.city {
            company.city = Some(city);
        }
        if let Some(region) = request.region {
            company.region = Some(region);
        }
        if let Some(email) = request.email {
            company.email = Some(email);
        }
        if let Some(phone) = request.phone {
            company.phone = Some(phone);
        }
        if let Some(website) = request.website {
            company.website = Some(website);
        }
        if let Some(is_featured) = request.is_featured {
            company.is_featured = is_featured;
        }
        if let Some(is_verified) = request.is_verified {
            company.is_verified = is_verified;
        }

        self.repository.update(&company).await
    }
}

/// Normalizar los query params a filtros del repositorio
fn parse_filters(params: CompanyQueryParams) -> Result<CompanySearchFilters, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let sort = match params.sort.as_deref() {
        // "relevance" se acepta pero no hay scoring: sin orden garantizado
        None | Some("") | Some("relevance") => None,
        Some(value) => Some(CompanySort::from_str(value).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid sort parameter: '{}'", value))
        })?),
    };

    let categories = params
        .categories
        .map(|raw| {
            raw.split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let search = params.search.filter(|s| !s.trim().is_empty());
    let region = params.region.filter(|r| !r.trim().is_empty());

    Ok(CompanySearchFilters {
        search,
        region,
        categories,
        sort,
        limit,
        offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CompanyQueryParams {
        CompanyQueryParams {
            search: None,
            region: None,
            categories: None,
            sort: None,
            limit: None,
            offset: None,
        }
    }

    #[test]
    fn test_parse_filters_defaults() {
        let filters = parse_filters(params()).unwrap();
        assert_eq!(filters.limit, DEFAULT_LIMIT);
        assert_eq!(filters.offset, 0);
        assert!(filters.sort.is_none());
        assert!(filters.categories.is_empty());
    }

    #[test]
    fn test_parse_filters_clamps_limit() {
        let mut p = params();
        p.limit = Some(5000);
        assert_eq!(parse_filters(p).unwrap().limit, MAX_LIMIT);

        let mut p = params();
        p.limit = Some(0);
        assert_eq!(parse_filters(p).unwrap().limit, 1);

        let mut p = params();
        p.offset = Some(-5);
        assert_eq!(parse_filters(p).unwrap().offset, 0);
    }

    #[test]
    fn test_parse_filters_splits_categories() {
        let mut p = params();
        p.categories = Some("svets, plåt,,vvs ".to_string());
        let filters = parse_filters(p).unwrap();
        assert_eq!(filters.categories, vec!["svets", "plåt", "vvs"]);
    }

    #[test]
    fn test_parse_filters_relevance_is_no_sort() {
        let mut p = params();
        p.sort = Some("relevance".to_string());
        assert!(parse_filters(p).unwrap().sort.is_none());
    }

    #[test]
    fn test_parse_filters_rejects_unknown_sort() {
        let mut p = params();
        p.sort = Some("rating".to_string());
        assert!(parse_filters(p).is_err());
    }

    #[test]
    fn test_parse_filters_blank_search_ignored() {
        let mut p = params();
        p.search = Some("   ".to_string());
        assert!(parse_filters(p).unwrap().search.is_none());
    }
}

//! Modelo de Company
//!
//! Este módulo contiene el struct Company y sus filtros de búsqueda.
//! Mapea exactamente a la tabla companies con primary key 'id'.
//! El slug se deriva del nombre al crear la empresa y es inmutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Company principal - mapea exactamente a la tabla companies
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description_sv: Option<String>,
    pub description_en: Option<String>,
    pub categories: Vec<String>,
    pub service_areas: Vec<String>,
    pub specialties: Vec<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub is_featured: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Campos descriptivos de una empresa nueva (el slug se genera aparte)
#[derive(Debug, Clone, Default)]
pub struct NewCompany {
    pub name: String,
    pub description_sv: Option<String>,
    pub description_en: Option<String>,
    pub categories: Vec<String>,
    pub service_areas: Vec<String>,
    pub specialties: Vec<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub is_featured: bool,
    pub is_verified: bool,
}

impl Company {
    pub fn new(slug: String, fields: NewCompany) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug,
            name: fields.name,
            description_sv: fields.description_sv,
            description_en: fields.description_en,
            categories: fields.categories,
            service_areas: fields.service_areas,
            specialties: fields.specialties,
            address: fields.address,
            postal_code: fields.postal_code,
            city: fields.city,
            region: fields.region,
            email: fields.email,
            phone: fields.phone,
            website: fields.website,
            is_featured: fields.is_featured,
            is_verified: fields.is_verified,
            created_at: Utc::now(),
        }
    }
}

/// Orden de los resultados de búsqueda
///
/// "relevance" se acepta como parámetro pero no hay scoring detrás:
/// equivale a no especificar orden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySort {
    NameAsc,
    NameDesc,
    Newest,
}

impl CompanySort {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name_asc" => Some(CompanySort::NameAsc),
            "name_desc" => Some(CompanySort::NameDesc),
            "newest" => Some(CompanySort::Newest),
            _ => None,
        }
    }

    pub fn order_by_clause(&self) -> &'static str {
        match self {
            CompanySort::NameAsc => " ORDER BY name ASC",
            CompanySort::NameDesc => " ORDER BY name DESC",
            CompanySort::Newest => " ORDER BY created_at DESC",
        }
    }
}

/// Filtros para búsqueda de companies
#[derive(Debug, Clone, Default)]
pub struct CompanySearchFilters {
    pub search: Option<String>,
    pub region: Option<String>,
    pub categories: Vec<String>,
    pub sort: Option<CompanySort>,
    pub limit: i64,
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_new_defaults() {
        let company = Company::new(
            "rusty-support-ab".to_string(),
            NewCompany {
                name: "Rusty Support AB".to_string(),
                region: Some("Stockholm".to_string()),
                categories: vec!["svets".to_string()],
                ..Default::default()
            },
        );

        assert_eq!(company.slug, "rusty-support-ab");
        assert!(!company.is_featured);
        assert!(!company.is_verified);
        assert!(company.created_at <= Utc::now());
    }

    #[test]
    fn test_sort_from_str() {
        assert_eq!(CompanySort::from_str("name_asc"), Some(CompanySort::NameAsc));
        assert_eq!(CompanySort::from_str("name_desc"), Some(CompanySort::NameDesc));
        assert_eq!(CompanySort::from_str("newest"), Some(CompanySort::Newest));
        assert_eq!(CompanySort::from_str("relevance"), None);
    }
}

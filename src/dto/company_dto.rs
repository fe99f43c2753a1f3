//! DTOs de empresas
//!
//! Requests de búsqueda y administración de empresas, más la response
//! genérica de la API.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::company::Company;

/// Query params de GET /api/companies
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyQueryParams {
    pub search: Option<String>,
    pub region: Option<String>,
    /// Lista separada por comas, p.ej. "svets,plåt"
    pub categories: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de listado con total para paginación
#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<Company>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Request para crear una empresa (solo admin)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 2, max = 255))]
    pub name: String,

    pub description_sv: Option<String>,
    pub description_en: Option<String>,

    pub categories: Option<Vec<String>>,
    pub service_areas: Option<Vec<String>>,
    pub specialties: Option<Vec<String>>,

    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 20))]
    pub postal_code: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    pub region: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub website: Option<String>,

    pub is_featured: Option<bool>,
    pub is_verified: Option<bool>,
}

/// Request para actualizar una empresa (solo admin)
///
/// El slug no aparece aquí: es inmutable desde la creación.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 2, max = 255))]
    pub name: Option<String>,

    pub description_sv: Option<String>,
    pub description_en: Option<String>,

    pub categories: Option<Vec<String>>,
    pub service_areas: Option<Vec<String>>,
    pub specialties: Option<Vec<String>>,

    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 20))]
    pub postal_code: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    pub region: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub website: Option<String>,

    pub is_featured: Option<bool>,
    pub is_verified: Option<bool>,
}

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

//! DTOs de autenticación

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::claim_dto::CompanyUserResponse;

/// Login legacy de empresa: email + access token opaco
#[derive(Debug, Deserialize)]
pub struct CompanyLoginRequest {
    pub email: String,
    pub access_token: String,
}

/// Response del login de empresa
#[derive(Debug, Serialize)]
pub struct CompanyLoginResponse {
    pub success: bool,
    pub company_user: Option<CompanyUserResponse>,
    pub token: Option<String>,
    pub message: Option<String>,
}

impl CompanyLoginResponse {
    pub fn success(company_user: CompanyUserResponse, token: String) -> Self {
        Self {
            success: true,
            company_user: Some(company_user),
            token: Some(token),
            message: None,
        }
    }
}

/// Login legacy de administrador
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// Response del login admin con JWT de sesión
#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub message: Option<String>,
}

impl AdminLoginResponse {
    pub fn success(token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            success: true,
            token: Some(token),
            expires_at: Some(expires_at),
            message: None,
        }
    }
}

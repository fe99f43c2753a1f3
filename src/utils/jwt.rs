//! Utilidades JWT para sesiones de administrador
//!
//! Este módulo contiene funciones helper para emitir y verificar los JWT
//! de la sesión admin. Acepta también tokens emitidos por el proveedor de
//! identidad externo (HS256 con el mismo secret) cuyo rol viene en
//! `app_metadata.role`.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::environment::EnvironmentConfig,
    models::auth::AuthRole,
    utils::errors::AppError,
};

/// Claims del JWT de sesión
///
/// `role` lo ponen nuestras sesiones legacy; los tokens del proveedor
/// externo llevan el rol dentro de `app_metadata`.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_metadata: Option<serde_json::Value>,
    pub exp: usize,
    pub iat: usize,
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Generar JWT de sesión para un administrador
pub fn generate_admin_token(
    admin_id: Uuid,
    username: &str,
    role: AuthRole,
    config: &JwtConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = JwtClaims {
        sub: admin_id.to_string(),
        username: Some(username.to_string()),
        role: Some(role.as_str().to_string()),
        app_metadata: None,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar JWT
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))?;

    Ok(token_data.claims)
}

/// Resolver el rol de unos claims verificados
///
/// El chequeo se hace una sola vez en el boundary: primero el claim `role`
/// propio, después `app_metadata.role` del proveedor externo. Cualquier
/// valor desconocido degrada a Anonymous.
pub fn resolve_role(claims: &JwtClaims) -> AuthRole {
    if let Some(role) = claims.role.as_deref().and_then(AuthRole::from_str) {
        return role;
    }

    if let Some(role) = claims
        .app_metadata
        .as_ref()
        .and_then(|meta| meta.get("role"))
        .and_then(|value| value.as_str())
        .and_then(AuthRole::from_str)
    {
        return role;
    }

    AuthRole::Anonymous
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    if !auth_header.starts_with("Bearer ") {
        return Err(AppError::Jwt(
            "Header Authorization debe comenzar con 'Bearer '".to_string(),
        ));
    }

    let token = &auth_header[7..];
    if token.is_empty() {
        return Err(AppError::Jwt("Token no puede estar vacío".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-for-unit-tests".to_string(),
            expiration: 3600,
        }
    }

    #[test]
    fn test_generate_and_verify_roundtrip() {
        let config = test_config();
        let admin_id = Uuid::new_v4();

        let token = generate_admin_token(admin_id, "admin", AuthRole::Admin, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, admin_id.to_string());
        assert_eq!(claims.username.as_deref(), Some("admin"));
        assert_eq!(resolve_role(&claims), AuthRole::Admin);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let config = test_config();
        let other = JwtConfig {
            secret: "other-secret".to_string(),
            expiration: 3600,
        };

        let token = generate_admin_token(Uuid::new_v4(), "admin", AuthRole::Admin, &config).unwrap();
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_resolve_role_from_app_metadata() {
        let claims = JwtClaims {
            sub: Uuid::new_v4().to_string(),
            username: None,
            role: None,
            app_metadata: Some(json!({ "role": "admin", "provider": "email" })),
            exp: 0,
            iat: 0,
        };

        assert_eq!(resolve_role(&claims), AuthRole::Admin);
    }

    #[test]
    fn test_resolve_role_unknown_is_anonymous() {
        let claims = JwtClaims {
            sub: "x".to_string(),
            username: None,
            role: Some("superhero".to_string()),
            app_metadata: Some(json!({ "role": "also-unknown" })),
            exp: 0,
            iat: 0,
        };

        assert_eq!(resolve_role(&claims), AuthRole::Anonymous);
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc123").unwrap(), "abc123");
        assert!(extract_token_from_header("abc123").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
    }
}

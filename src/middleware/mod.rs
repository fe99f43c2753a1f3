//! Middleware del sistema
//!
//! Extractores de autenticación y configuración de CORS.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;

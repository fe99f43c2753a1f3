//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod admin;
pub mod auth;
pub mod claim;
pub mod company;
pub mod company_user;
pub mod quote;

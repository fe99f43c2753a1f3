//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula las queries SQL de una tabla.

pub mod admin_repository;
pub mod claim_repository;
pub mod company_repository;
pub mod company_user_repository;
pub mod quote_repository;

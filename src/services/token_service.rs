//! Servicio de access tokens
//!
//! Genera los tokens opacos que se emiten al aprobar una reclamación.
//! El token es la única credencial del login legacy de empresas; la
//! unicidad global la garantiza el índice UNIQUE de la tabla.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Longitud del token opaco
pub const ACCESS_TOKEN_LENGTH: usize = 48;

/// Generar un access token opaco alfanumérico
pub fn generate_access_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ACCESS_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        let token = generate_access_token();
        assert_eq!(token.len(), ACCESS_TOKEN_LENGTH);
        assert!(token.len() > 10);
    }

    #[test]
    fn test_token_charset_is_alphanumeric() {
        let token = generate_access_token();
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_are_not_repeated() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(generate_access_token()));
        }
    }
}

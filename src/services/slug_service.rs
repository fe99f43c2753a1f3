//! Servicio de slugs
//!
//! Deriva el identificador público de una empresa a partir de su nombre.
//! El slug se genera una sola vez al crear la empresa y es inmutable:
//! las actualizaciones nunca lo tocan.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MULTI_DASH: Regex = Regex::new(r"-{2,}").unwrap();
}

/// Derivar un slug URL-safe a partir de un nombre de empresa
///
/// Minúsculas, caracteres nórdicos plegados a ASCII, todo lo demás
/// colapsado a guiones. "Rusty Support AB" → "rusty-support-ab".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    for c in name.to_lowercase().chars() {
        match c {
            'å' | 'ä' | 'à' | 'á' | 'â' => slug.push('a'),
            'ö' | 'ò' | 'ó' | 'ô' => slug.push('o'),
            'é' | 'è' | 'ê' | 'ë' => slug.push('e'),
            'ü' | 'ù' | 'ú' => slug.push('u'),
            c if c.is_ascii_alphanumeric() => slug.push(c),
            _ => slug.push('-'),
        }
    }

    let slug = MULTI_DASH.replace_all(&slug, "-");
    slug.trim_matches('-').to_string()
}

/// Candidato n-ésimo cuando el slug base ya existe
///
/// El primer candidato es el slug base; los siguientes llevan sufijo
/// numérico empezando en 2 ("rusty-support-ab-2").
pub fn slug_candidate(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate_slug;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Rusty Support AB"), "rusty-support-ab");
    }

    #[test]
    fn test_slugify_swedish_characters() {
        assert_eq!(slugify("Svets & Smide Örebro"), "svets-smide-orebro");
        assert_eq!(slugify("Måleri Västerås AB"), "maleri-vasteras-ab");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("  El-Service  --  Nord  "), "el-service-nord");
    }

    #[test]
    fn test_slugify_output_is_valid_slug() {
        for name in ["Rusty Support AB", "Göteborgs Plåt & Svets", "VVS 24/7 Stockholm"] {
            assert!(validate_slug(&slugify(name)).is_ok(), "slug inválido para {:?}", name);
        }
    }

    #[test]
    fn test_slug_candidate_suffix() {
        assert_eq!(slug_candidate("rusty-support-ab", 1), "rusty-support-ab");
        assert_eq!(slug_candidate("rusty-support-ab", 2), "rusty-support-ab-2");
        assert_eq!(slug_candidate("rusty-support-ab", 3), "rusty-support-ab-3");
    }
}

//! Fallback responder: canned prompts for queries no sentence answers well.

use crate::types::KeywordSet;

/// Generic prompts used when the query names no species and no region.
pub const GENERIC_PROMPTS: [&str; 3] = [
    "¿Podrías ser más específico? Por ejemplo: 'jaguar', 'condor andino', 'animales en peligro'",
    "Pregúntame sobre especies específicas como jaguar, cóndor, oso andino, o regiones como Amazonía, Altiplano",
    "Intenta con: 'especies en peligro', 'fauna amazónica', 'flora andina', 'parques nacionales'",
];

/// Prompt for a query whose best match fell below the confidence threshold.
///
/// Species beat regions; otherwise one of [`GENERIC_PROMPTS`] is picked by a
/// stable hash of the raw query, so the same question always gets the same
/// prompt.
pub fn respond(keywords: &KeywordSet, query: &str) -> String {
    if let Some(species) = keywords.especies.first() {
        format!(
            "¿Te interesa saber más sobre el {species}? Pregunta sobre su hábitat, alimentación o estado de conservación."
        )
    } else if let Some(region) = keywords.regiones.first() {
        format!(
            "¿Quieres conocer la biodiversidad de la región {region}? Pregunta sobre animales o plantas específicos de esta zona."
        )
    } else {
        GENERIC_PROMPTS[stable_hash(query) % GENERIC_PROMPTS.len()].to_string()
    }
}

/// djb2 (`h * 33 + byte`, seeded with 5381), stable across runs and Rust
/// versions.
fn stable_hash(s: &str) -> usize {
    s.bytes()
        .fold(5381usize, |acc, b| acc.wrapping_mul(33).wrapping_add(b as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(especies: &[&str], regiones: &[&str]) -> KeywordSet {
        KeywordSet {
            all: especies.iter().chain(regiones).map(|s| s.to_string()).collect(),
            especies: especies.iter().map(|s| s.to_string()).collect(),
            regiones: regiones.iter().map(|s| s.to_string()).collect(),
            conceptos: Vec::new(),
        }
    }

    #[test]
    fn species_wins_over_region() {
        let out = respond(&kw(&["rana", "jaguar"], &["titicaca"]), "rana titicaca");
        assert!(out.contains("sobre el rana?"), "{out}");
    }

    #[test]
    fn region_when_no_species() {
        let out = respond(&kw(&[], &["chaco"]), "chaco");
        assert!(out.contains("la región chaco?"), "{out}");
    }

    #[test]
    fn stable_hash_is_djb2() {
        assert_eq!(stable_hash(""), 5381);
        assert_eq!(stable_hash("a"), 5381 * 33 + 97);
        assert_eq!(stable_hash("ab"), (5381 * 33 + 97) * 33 + 98);
    }

    #[test]
    fn generic_prompt_is_deterministic() {
        let a = respond(&KeywordSet::default(), "mamíferos registrados");
        let b = respond(&KeywordSet::default(), "mamíferos registrados");
        assert_eq!(a, b);
        assert!(GENERIC_PROMPTS.contains(&a.as_str()));
    }
}

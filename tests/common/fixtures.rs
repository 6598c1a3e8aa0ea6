//! Static queries and sentences used across harnesses.

/// The single-sentence knowledge base used by the scoring properties.
pub const JAGUAR_SENTENCE: &str = "El jaguar es el felino más grande de América";

/// Backup sentence that names the jucumari.
pub const JUCUMARI_SENTENCE: &str =
    "El oso andino o jucumari es el único oso de Sudamérica y está en peligro de extinción";

/// Queries that name a species and must match a backup sentence mentioning it.
/// `(query, word the answer must contain)`.
pub const SPECIES_QUERIES: &[(&str, &str)] = &[
    ("jaguar", "jaguar"),
    ("¿Dónde vive el jaguar en Bolivia?", "jaguar"),
    ("condor andino", "cóndor"),
    ("oso andino habitat", "oso andino"),
    ("paraba frente roja", "paraba"),
    ("delfin rosado", "delfín"),
    ("armadillo gigante", "armadillo"),
    ("rana titicaca", "Titicaca"),
];

/// Queries made only of stopwords and punctuation.
pub const STOPWORD_ONLY_QUERIES: &[&str] = &[
    "¿Que es el de la?",
    "de la",
    "y o a",
    "¿?!",
    "...",
    "donde, cuando, porque",
];

pub const BLANK_QUERIES: &[&str] = &["", " ", "   ", "\t", "\n\t  "];

/// Stopwords for property tests, all at least three characters long.
pub const SOME_STOPWORDS: &[&str] = &[
    "que", "los", "del", "las", "por", "para", "con", "una", "como", "pero", "este", "donde",
];

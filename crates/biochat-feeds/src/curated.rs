//! Curated portal lists: fixed sentences standing in for the national
//! biodiversity portal and the Bolivian fauna portal.

use crate::clean::Cleaner;
use biochat_core::{SentenceSource, SourceError};

const BIODIVERSIDAD: &[&str] = &[
    "Bolivia es uno de los 15 países con mayor biodiversidad del mundo",
    "El territorio boliviano alberga más de 14,000 especies de plantas con semillas",
    "Existen más de 1,400 especies de aves registradas en Bolivia",
    "Bolivia cuenta con 318 especies de mamíferos nativos",
    "La rana gigante del Lago Titicaca es endémica de esta región",
    "El Parque Nacional Madidi es el área protegida más biodiversa del mundo",
    "El jaguar es el felino más grande de América y habita en la Amazonía boliviana",
    "El cóndor andino es considerada el ave nacional de Bolivia",
    "La quinua es un cultivo ancestral originario del altiplano boliviano",
    "Bolivia tiene 22 áreas protegidas de carácter nacional",
];

const FAUNA: &[&str] = &[
    "El oso andino es el único úrsido de Sudamérica y está en peligro de extinción",
    "La paraba frente roja es endémica de los valles interandinos de Bolivia",
    "El armadillo gigante puede pesar hasta 60 kg y está en peligro crítico",
    "El delfín rosado de río habita en las cuencas amazónicas de Bolivia",
    "El águila harpía es una de las rapaces más grandes del mundo y vive en la Amazonía",
    "El caimán negro es un reptil amenazado que habita en ríos tropicales",
    "La taruca es un venado andino en peligro de extinción",
    "El gato andino es uno de los felinos más raros y amenazados de Bolivia",
    "La vizcacha es un roedor característico de las formaciones rocosas del altiplano",
    "El flamenco andino anida en los lagos salados del altiplano boliviano",
];

/// A named, fixed list of sentences.
pub struct CuratedSource {
    name: &'static str,
    sentences: &'static [&'static str],
    cleaner: Cleaner,
}

impl CuratedSource {
    pub fn biodiversidad() -> Self {
        Self {
            name: "biodiversidad-bolivia",
            sentences: BIODIVERSIDAD,
            cleaner: Cleaner::default(),
        }
    }

    pub fn fauna() -> Self {
        Self {
            name: "fauna-bolivia",
            sentences: FAUNA,
            cleaner: Cleaner::default(),
        }
    }
}

impl SentenceSource for CuratedSource {
    fn name(&self) -> &str {
        self.name
    }

    fn fetch_candidate_sentences(&self) -> Result<Vec<String>, SourceError> {
        Ok(self
            .sentences
            .iter()
            .filter_map(|s| self.cleaner.clean(s))
            .collect())
    }
}

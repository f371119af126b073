//! src/app/reglages.rs
//!
//! Réglages de la session (issus de la ligne de commande / de l'environnement).
//! Les bornes du noyau (longueur, exposant) n'en font PAS partie : elles sont le contrat de sûreté.

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatSortie {
    /// Valeur seule (et démarche si demandée)
    #[default]
    Texte,
    /// Un objet JSON par évaluation
    Json,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub demarche: bool,
    pub format: FormatSortie,
}

impl Reglages {
    pub fn with_demarche(mut self, demarche: bool) -> Self {
        self.demarche = demarche;
        self
    }

    pub fn with_format(mut self, format: FormatSortie) -> Self {
        self.format = format;
        self
    }
}

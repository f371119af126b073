// src/outils/calculatrice.rs
//
// Outil "calculatrice" : texte brut -> noyau sûr -> texte rendu.
// Le rendu (préfixes, format des nombres) vit ici, pas dans le noyau.

use tracing::{info, warn};

use crate::noyau::{evaluer, format_nombre, ErreurEval, Nombre};

use super::registre::Outil;

pub struct Calculatrice;

/// Rendu d'une issue d'évaluation pour l'appelant.
pub fn rendre(issue: &Result<Nombre, ErreurEval>) -> String {
    match issue {
        Ok(n) => format!("Résultat : {}", format_nombre(n)),
        Err(e) => format!("Erreur : {e}"),
    }
}

impl Outil for Calculatrice {
    fn nom(&self) -> &str {
        "calculatrice"
    }

    fn description(&self) -> &str {
        "Calcul arithmétique sûr : + - * / // % ** et parenthèses. Exemple : (123 + 456) * 789 / 12"
    }

    fn invoquer(&self, entree: &str) -> String {
        info!(expression = %entree, "calculatrice");
        let issue = evaluer(entree);
        if let Err(e) = &issue {
            warn!(genre = e.genre(), "calcul refusé");
        }
        rendre(&issue)
    }
}

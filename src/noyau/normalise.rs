// src/noyau/normalise.rs
//
// Normalisation de l'entrée, AVANT toute lecture :
// - trim
// - glyphes d'affichage : × -> *, ÷ -> /
// - bornes : vide => EntreeVide ; > LONGUEUR_MAX caractères => TropLong
//
// La borne de longueur (avec la garde d'exposant) borne le travail du parseur.

use super::erreur::ErreurEval;

/// Longueur maximale (en caractères) d'une expression normalisée.
pub const LONGUEUR_MAX: usize = 200;

pub fn normaliser(entree: &str) -> Result<String, ErreurEval> {
    let s = entree.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    let s = s.replace('×', "*").replace('÷', "/");

    let longueur = s.chars().count();
    if longueur > LONGUEUR_MAX {
        return Err(ErreurEval::TropLong {
            longueur,
            max: LONGUEUR_MAX,
        });
    }

    Ok(s)
}

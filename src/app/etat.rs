//! src/app/etat.rs
//!
//! État de session (sans rendu, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche)
//! et offrir des opérations simples (CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_sure::noyau::{Demarche, ErreurEval};

#[derive(Clone, Debug, Default)]
pub struct Session {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,           // valeur formatée (dernier succès)
    pub erreur: Option<ErreurEval>, // dernier refus, si l'évaluation a échoué
    pub demarche: Option<Demarche>,

    // --- compteurs ---
    pub evaluations: usize,
    pub refus: usize,
}

impl Session {
    /* ------------------------ Actions (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + compteurs).
    pub fn reset_total(&mut self) {
        *self = Session::default();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur = None;
        self.demarche = None;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier succès) ; la démarche n'est plus fiable.
    pub fn set_erreur(&mut self, e: ErreurEval) {
        self.erreur = Some(e);
        self.demarche = None;
        self.evaluations += 1;
        self.refus += 1;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur = None;
        self.resultat = resultat.into();
        self.demarche = Some(demarche);
        self.evaluations += 1;
    }

    pub fn en_erreur(&self) -> bool {
        self.erreur.is_some()
    }
}

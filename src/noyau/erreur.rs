// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Toutes terminales : le noyau ne réessaie jamais, il classe et rend la main.

use thiserror::Error;

/// Erreur classée d’une évaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurEval {
    #[error("entrée vide : fournir une expression mathématique")]
    EntreeVide,

    #[error("expression trop longue ({longueur} caractères, maximum {max})")]
    TropLong { longueur: usize, max: usize },

    #[error("erreur de syntaxe : {0}")]
    Syntaxe(String),

    #[error("opérateur non supporté : {0}")]
    OperateurNonSupporte(String),

    #[error("syntaxe non supportée : {0}")]
    SyntaxeNonSupportee(String),

    #[error("exposant trop grand ({0}), refusé")]
    ExposantTropGrand(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// Faute arithmétique interne (débordement, résultat complexe…), message conservé.
    #[error("calcul impossible : {0}")]
    Calcul(String),
}

impl ErreurEval {
    /// Étiquette stable (journal, sortie JSON).
    pub fn genre(&self) -> &'static str {
        match self {
            ErreurEval::EntreeVide => "empty_input",
            ErreurEval::TropLong { .. } => "too_long",
            ErreurEval::Syntaxe(_) => "syntax_error",
            ErreurEval::OperateurNonSupporte(_) => "unsupported_operator",
            ErreurEval::SyntaxeNonSupportee(_) => "unsupported_syntax",
            ErreurEval::ExposantTropGrand(_) => "exponent_too_large",
            ErreurEval::DivisionParZero => "division_by_zero",
            ErreurEval::Calcul(_) => "computation",
        }
    }

    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurEval::Syntaxe(msg.into())
    }

    pub(crate) fn non_supportee(msg: impl Into<String>) -> Self {
        ErreurEval::SyntaxeNonSupportee(msg.into())
    }
}

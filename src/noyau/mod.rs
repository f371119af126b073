//! Noyau sûr : évaluateur arithmétique en bac à sable
//!
//! Organisation interne :
//! - normalise.rs : trim, glyphes × ÷, bornes de longueur
//! - jetons.rs    : tokenisation stricte (aucun nom n'est résolu)
//! - rpn.rs       : shunting-yard + construction de l'arbre
//! - arbre.rs     : AST fermé (littéral, unaire, binaire)
//! - nombre.rs    : entiers exacts / réels, sémantique plancher
//! - eval.rs      : liste blanche + garde d'exposant + pipeline complet
//! - format.rs    : affichage des nombres (côté appelant)
//! - erreur.rs    : taxonomie des refus

pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod nombre;
pub mod normalise;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evaluer, evaluer_avec_demarche, Demarche, EXPOSANT_MAX};
pub use format::format_nombre;
pub use nombre::Nombre;
pub use normalise::LONGUEUR_MAX;

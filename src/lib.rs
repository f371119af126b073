//! Calculatrice sûre
//!
//! - `noyau`  : évaluateur arithmétique en bac à sable (`noyau::evaluer`)
//! - `outils` : registre d'outils nommés, dont la calculatrice

pub mod noyau;
pub mod outils;
